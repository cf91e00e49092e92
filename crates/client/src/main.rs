use anyhow::Result;
use tokio::io::BufReader;

use rpg_client::{ClientConfig, build_session, setup_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    // Keep the guard alive so buffered log lines reach the file.
    let _log_guard = setup_logging(&config)?;

    let mut session = build_session(&config)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let summary = session.run(stdin, stdout).await?;

    tracing::info!(
        "Final status: {} (levels gained: {})",
        summary.status,
        summary.levels_gained
    );
    Ok(())
}
