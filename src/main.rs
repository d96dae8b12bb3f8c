//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact directory over stdin/stdout. Logs go to
//! stderr so they never interleave with the conversation.

use anyhow::Result;
use assistant_bot::bot::session;
use assistant_bot::{Config, Router};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(lookahead_days = config.lookahead_days, "Starting assistant bot");

    let mut router = Router::new(config.lookahead_days);
    let input = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = session::run(&mut router, input, tokio::io::stdout()) => {
            if let Err(e) = result {
                error!("Session I/O failed: {}", e);
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(format!("\n- {}\n", session::FAREWELL).as_bytes())
                .await?;
            stdout.flush().await?;
            // The pending stdin read sits on a blocking thread that runtime
            // shutdown would wait on, so leave without unwinding the runtime.
            info!("Assistant bot shutdown complete");
            std::process::exit(0);
        }
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
