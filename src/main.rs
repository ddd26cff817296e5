//! Keyrelay - send a prompt through a rotating list of API keys.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyrelay::cli::output;
use keyrelay::cli::{execute, Cli};
use keyrelay::core::constants::LOG_ENV;
use keyrelay::error::{ConfigError, Error, StoreError, ValidationError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyrelay=debug")
        } else {
            EnvFilter::new("keyrelay=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Store(StoreError::Parse { .. }) => {
                Some("the key file must be a JSON array of strings")
            }
            Error::Config(ConfigError::Parse { .. }) => {
                Some("check .keyrelay.toml for typos or unknown fields")
            }
            Error::Validation(ValidationError::InvalidCount(_)) => {
                Some("enter a whole number, e.g. 3")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
