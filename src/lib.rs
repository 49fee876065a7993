//! Compiles admin-cabinet and extension JavaScript sources with Babel.
//!
//! The resolver maps a source file to its output folder, the transpiler
//! module runs Babel on it and [`compile::compile_file`] ties both together.

pub mod cli;
pub mod compile;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod transpiler;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_verbosity, options_from_matches};
    pub use crate::compile::{CompileOptions, Outcome, compile_file};
    pub use crate::errors::{
        file_operation_error, generic_error, transpiler_error, transpiler_launch_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::resolver::{Layout, Resolution, resolve};
}
