//! External transpiler invocation
//!
//! Builds the Babel command line for a single source file and runs it with
//! the caller's standard streams.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::debug;

use crate::config::SourceMaps;
use crate::constants::OUTPUT_EXTENSION;
use crate::errors::{Result, transpiler_error, transpiler_launch_error};

/// One transpiler run
#[derive(Debug, Clone, PartialEq)]
pub struct TranspileJob {
    pub program: PathBuf,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub source_maps: SourceMaps,
    pub preset: String,
    pub extra_args: Vec<String>,
}

impl TranspileJob {
    /// Arguments passed to the program, in order
    pub fn args(&self) -> Vec<&OsStr> {
        let mut args: Vec<&OsStr> = vec![
            self.input.as_os_str(),
            OsStr::new("--out-dir"),
            self.output_dir.as_os_str(),
        ];
        args.extend(self.source_maps.args().into_iter().map(OsStr::new));
        args.push(OsStr::new("--presets"));
        args.push(OsStr::new(&self.preset));
        args.extend(self.extra_args.iter().map(OsStr::new));
        args
    }

    /// The command, ready to spawn with inherited standard streams
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Quoted command line for log messages
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args())
            .map(|arg| quote(&arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// File Babel writes for the input, `<output_dir>/<stem>.js`
    pub fn output_file(&self) -> PathBuf {
        let mut name = self
            .input
            .file_stem()
            .unwrap_or_else(|| self.input.as_os_str())
            .to_os_string();
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        self.output_dir.join(name)
    }

    /// Runs the transpiler to completion
    ///
    /// # Errors
    /// * `Error::TranspilerLaunch` if the program cannot be started
    /// * `Error::Transpiler` if it exits with a non-zero status
    pub fn run(&self) -> Result<()> {
        debug!("Spawning {}", self.program.display());

        let status = self
            .command()
            .status()
            .map_err(|e| transpiler_launch_error(e, self.program.clone()))?;

        debug!("{} finished with {status}", self.program.display());

        if status.success() {
            Ok(())
        } else {
            Err(transpiler_error(self.program.clone(), status))
        }
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("\"{}\"", arg.replace('"', "\\\""))
    }
}
