//! Takeout CLI

use std::{io, process::ExitCode};

use thiserror::Error;
use tracing::{error, warn};

use takeout::{
    config::Config,
    logging,
    menu::MenuError,
    receipt::{Receipt, ReceiptError},
    session::{SessionError, place_order},
};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Takeout entry point
pub fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            let code = if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };

            _ = error.print();

            return code;
        }
    };

    if let Err(error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(source) => {
            error!("{source}");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let catalog = config.catalog()?;

    if catalog.is_empty() {
        warn!("menu has no items, every selection will be rejected");
    }

    let (order, total) = place_order(&catalog, io::stdin().lock(), io::stdout().lock())?;

    Receipt::new(&order, total).write_to(io::stdout().lock())?;

    Ok(())
}
