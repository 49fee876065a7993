//! Compilation workflow
//!
//! This module ties the resolver, the configuration and the transpiler
//! together for a single source file.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use log::{debug, info};

use crate::config::load_or_default;
use crate::logging::format_message;
use crate::resolver::resolve;
use crate::transpiler::TranspileJob;
use crate::utils::ensure_directory;

/// Options for compiling a file
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Source file to compile
    pub input: PathBuf,
    /// Explicit configuration file, if any
    pub config_path: Option<PathBuf>,
    /// Whether to stop after resolving and printing the command
    pub dry_run: bool,
    /// Transpiler program overriding the configuration
    pub program_override: Option<PathBuf>,
    /// Preset overriding the configuration
    pub preset_override: Option<String>,
}

/// What happened to the input file
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The path matched no known layout
    Skipped,
    /// Dry run; the job that would have been executed
    DryRun { job: TranspileJob },
    /// The transpiler succeeded
    Compiled { output_file: PathBuf },
}

/// Compiles one source file into its layout's output folder
///
/// Steps:
/// 1. Resolve the output folder; unmatched paths are skipped
/// 2. Load the configuration (or the defaults)
/// 3. Create the output folder
/// 4. Run the transpiler
///
/// # Errors
/// * Returns an error if the configuration cannot be loaded
/// * Returns an error if the output folder cannot be created
/// * Returns an error if the transpiler cannot be started or fails
pub fn compile_file(options: &CompileOptions) -> Result<Outcome> {
    let Some(resolution) = resolve(&options.input) else {
        info!(
            "{} does not match any known layout, skipping",
            options.input.display()
        );
        return Ok(Outcome::Skipped);
    };

    debug!(
        "{} uses the {} layout (sub-folder: {:?})",
        options.input.display(),
        resolution.layout,
        resolution.relative_dir
    );

    let config = load_or_default(options.config_path.as_deref())?;

    let program = match &options.program_override {
        Some(program) => program.clone(),
        None => config.program_path(&env::current_dir()?),
    };
    let preset = options
        .preset_override
        .clone()
        .unwrap_or_else(|| config.transpiler.preset.clone());

    let job = TranspileJob {
        program,
        input: options.input.clone(),
        output_dir: resolution.output_dir,
        source_maps: config.transpiler.source_maps,
        preset,
        extra_args: config.transpiler.extra_args.clone(),
    };

    if options.dry_run {
        info!("[dry run] {}", job.display_command());
        return Ok(Outcome::DryRun { job });
    }

    if ensure_directory(&job.output_dir)? {
        info!("Created directory: {}", job.output_dir.display());
    }

    info!(
        "Running for {}: {}",
        resolution.layout,
        job.display_command()
    );
    job.run()?;

    let output_file = job.output_file();
    let message = format!(
        "Compiled ({}): {} -> {}",
        resolution.layout,
        job.input.display(),
        output_file.display()
    );
    let colored_message = format!(
        "Compiled ({}): {} -> {}",
        resolution.layout,
        job.input.display(),
        output_file.display().to_string().green().bold()
    );
    info!("{}", format_message(&message, &colored_message));

    Ok(Outcome::Compiled { output_file })
}
