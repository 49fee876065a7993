use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::compile::CompileOptions;
use crate::constants::{
    BABEL_HELP, CONFIG_HELP, DRY_RUN_HELP, FILE_HELP, LOG_FILE_HELP, PRESET_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::expand_path;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `file`: The source file to compile
/// - `config`: Path to the configuration file
/// - `dry`: Resolve without compiling
/// - `verbose`: Increase verbosity level
/// - `log_file`: Additional log file
/// - `babel` / `preset`: Transpiler overrides
pub fn build_command() -> Command {
    // define the positional source file
    let arg_file = Arg::new("file")
        .help(FILE_HELP)
        .value_name("FILE")
        .required(true);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help(CONFIG_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    let arg_babel = Arg::new("babel")
        .short('b')
        .long("babel")
        .value_name("PATH")
        .help(BABEL_HELP);

    let arg_preset = Arg::new("preset")
        .short('p')
        .long("preset")
        .value_name("NAME")
        .help(PRESET_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_file)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
        .arg(arg_babel)
        .arg(arg_preset)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file requested on the command line, with `~` expanded
pub fn get_log_file(matches: &ArgMatches) -> Option<String> {
    matches
        .get_one::<String>("log_file")
        .map(|path| expand_path(path))
}

/// Turns parsed arguments into compile options
///
/// # Errors
/// Returns an error if the file argument is missing
pub fn options_from_matches(matches: &ArgMatches) -> Result<CompileOptions> {
    let input = matches
        .get_one::<String>("file")
        .ok_or_else(|| generic_error("Source file argument not found"))?;

    Ok(CompileOptions {
        input: PathBuf::from(input),
        config_path: matches
            .get_one::<String>("config")
            .map(|path| PathBuf::from(expand_path(path))),
        dry_run: matches.get_flag("dry"),
        program_override: matches
            .get_one::<String>("babel")
            .map(|path| PathBuf::from(expand_path(path))),
        preset_override: matches.get_one::<String>("preset").cloned(),
    })
}
