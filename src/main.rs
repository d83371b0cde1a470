//! Credential validator - Entry Point
//!
//! Reads `username<TAB>password<TAB>confirmation` lines from stdin and
//! reports whether each set of credentials would pass the configured rules.

use std::process::ExitCode;

use log::info;
use tokio::io::{self, BufReader};

use credential_validator::console;
use credential_validator::error::AppError;
use credential_validator::error::handlers::{error_to_exit_code, handle_error};
use credential_validator::utils::logging::setup_logging;
use credential_validator::{Credentials, FormSession, ValidatorConfig};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = ValidatorConfig::load()?;
    let validator = config.build_validator();
    info!(
        "Validating with {} password requirement(s)",
        validator.requirements().len()
    );

    let mut session = FormSession::new(
        Box::new(validator),
        Box::new(|credentials: Credentials| {
            info!("Accepted credentials for {:?}", credentials.username);
        }),
    );

    let reader = BufReader::new(io::stdin());
    let mut writer = io::stdout();
    console::run(reader, &mut writer, &mut session).await
}
