use categorise::config::Cli;
use categorise::run;

use anyhow::Context;
use clap::Parser;
use log::info;
use std::io::stdout;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(path) = cli.transactions.as_deref() else {
        return Ok(());
    };

    let summary = run(path, &cli.settings(), stdout().lock())
        .await
        .with_context(|| format!("Failed to categorise {}", path.display()))?;

    info!(
        "{} rows, {} categorised, {} uncategorised{}",
        summary.rows,
        summary.categorised,
        summary.uncategorised,
        if summary.stopped_early { " (stopped early)" } else { "" }
    );

    Ok(())
}
