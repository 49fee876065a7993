use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use asset_compile::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches);
    if let Err(e) = init_logger(verbosity, log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let result = options_from_matches(&matches)
        .map_err(anyhow::Error::from)
        .and_then(|options| compile_file(&options));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
