use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Custom error type for the asset compiler
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The transpiler could not be started
    TranspilerLaunch { source: io::Error, program: PathBuf },
    /// The transpiler ran but reported a failure
    Transpiler { program: PathBuf, status: ExitStatus },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::TranspilerLaunch { source, program } => {
                write!(f, "Failed to start {}: {source}", program.display())
            }
            Error::Transpiler { program, status } => match status.code() {
                Some(code) => write!(
                    f,
                    "Compilation failed: {} exited with status {code}",
                    program.display()
                ),
                None => write!(
                    f,
                    "Compilation failed: {} was terminated by a signal",
                    program.display()
                ),
            },
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::TranspilerLaunch { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the asset compiler
///
/// # Examples
/// ```
/// use asset_compile::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a transpiler launch error
pub fn transpiler_launch_error(err: io::Error, program: PathBuf) -> Error {
    Error::TranspilerLaunch {
        source: err,
        program,
    }
}

/// Helper function to create a transpiler failure error
pub fn transpiler_error(program: PathBuf, status: ExitStatus) -> Error {
    Error::Transpiler { program, status }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
