//! Configuration module
//!
//! This module contains the configuration model and the functions that
//! locate and load it.

pub mod loader;
pub mod model;

pub use loader::{find_config, load_config, load_or_default};
pub use model::{Config, SourceMaps, TranspilerConfig};
