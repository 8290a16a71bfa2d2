//! Write a value to the deployed SimpleStorage contract and read it back

use std::process::ExitCode;

use ethers::types::U256;
use helpers::{init_tracing, interact, report, setup_script, InteractError, ScriptConfig};

async fn run(config: &ScriptConfig) -> Result<U256, InteractError> {
    let setup = setup_script(config)?;
    interact(&setup, U256::from(config.value)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = ScriptConfig::default();
    match run(&config).await {
        Ok(value) => {
            report(value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Interaction aborted");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
