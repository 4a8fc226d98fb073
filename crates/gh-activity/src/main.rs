use anyhow::{Context, Result};
use gh_activity::config::ReporterConfig;
use gh_activity::logger;
use gh_client::OctocrabClient;
use std::io;
use std::process::ExitCode;

const BIN_NAME: &str = env!("CARGO_BIN_NAME");

fn main() -> ExitCode {
    logger::init();

    let Some(account) = std::env::args().nth(1) else {
        println!("Usage: {} <username>", BIN_NAME);
        return ExitCode::SUCCESS;
    };

    match report(&account) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Activity report for {} failed: {:#}", account, e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn report(account: &str) -> Result<()> {
    let config = ReporterConfig::load();
    log::info!("Fetching public activity of {}", account);

    // Single thread: the one request blocks the whole flow until it completes.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        // Octocrab spawns its service buffer, so it must be built on the runtime.
        let client = OctocrabClient::unauthenticated(&config.api_base_url).with_context(|| {
            format!("Failed to build GitHub client for {}", config.api_base_url)
        })?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        gh_activity::run(&client, account, &mut out).await?;
        Ok::<(), anyhow::Error>(())
    })
}
