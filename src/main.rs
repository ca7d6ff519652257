pub mod classifier;
pub mod config;
pub mod error;
pub mod provision;

use std::process::ExitCode;

use tracing::{error, info};

use provision::{Outcome, ProvisionConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = ProvisionConfig::system_defaults();

    match provision::run(&config) {
        Ok(Outcome::Provisioned(vendor)) => {
            info!("Provisioned wifi CID type '{}'", vendor);
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoMatch) => {
            info!("No vendor match, CID file removed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Provisioning failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
