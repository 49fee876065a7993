//! Configuration data structures

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::{DEFAULT_PRESET, DEFAULT_PROGRAM};
use crate::utils::expand_path;

/// Top-level configuration file
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings for the external transpiler
    #[serde(default)]
    pub transpiler: TranspilerConfig,
    /// Folder the configuration was read from
    #[serde(skip_deserializing)]
    pub base_dir: Option<PathBuf>,
}

/// How the transpiler is invoked
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TranspilerConfig {
    /// Babel executable; `~` and `$VAR` are expanded
    pub program: String,
    /// Preset passed with `--presets`
    pub preset: String,
    pub source_maps: SourceMaps,
    /// Appended after the generated arguments
    pub extra_args: Vec<String>,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        TranspilerConfig {
            program: DEFAULT_PROGRAM.to_string(),
            preset: DEFAULT_PRESET.to_string(),
            source_maps: SourceMaps::default(),
            extra_args: Vec::new(),
        }
    }
}

/// Source map mode, mirroring Babel's `--source-maps` values
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceMaps {
    #[default]
    Inline,
    External,
    Both,
    None,
}

impl SourceMaps {
    /// Command-line arguments that select this mode
    pub fn args(&self) -> Vec<&'static str> {
        match self {
            SourceMaps::Inline => vec!["--source-maps", "inline"],
            SourceMaps::External => vec!["--source-maps"],
            SourceMaps::Both => vec!["--source-maps", "both"],
            SourceMaps::None => Vec::new(),
        }
    }
}

impl Config {
    /// Checks that the transpiler settings can be used
    pub fn validate(&self) -> Result<()> {
        if self.transpiler.program.trim().is_empty() {
            return Err(anyhow!(
                "No transpiler program specified in configuration. Set transpiler.program to the Babel executable."
            ));
        }

        if self.transpiler.preset.trim().is_empty() {
            return Err(anyhow!(
                "No preset specified in configuration. Set transpiler.preset or remove it to use '{}'.",
                DEFAULT_PRESET
            ));
        }

        Ok(())
    }

    /// Resolves the transpiler executable
    ///
    /// A relative program is taken relative to the folder of the
    /// configuration file, or to `fallback` when the defaults are in use.
    pub fn program_path(&self, fallback: &Path) -> PathBuf {
        let program = PathBuf::from(expand_path(&self.transpiler.program));
        if program.is_absolute() {
            return program;
        }

        // Bare names such as `babel` are left for the PATH lookup
        if program.components().count() == 1 {
            return program;
        }

        self.base_dir
            .as_deref()
            .unwrap_or(fallback)
            .join(program)
    }
}
