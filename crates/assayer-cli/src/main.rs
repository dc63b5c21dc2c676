//! Assayer CLI - analyze chemical-property tables scattered across
//! technical report documents.

use anyhow::Context;
use assayer_cli::{commands, interactive, Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });
    config
        .curator
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid curator configuration")?;
    tracing::debug!("Using model '{}'", config.llm.model);

    // Determine output format and color setting
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await?,
        Command::Interactive => interactive::run_interactive(&config, &formatter).await?,
        Command::Verify => commands::execute_verify(&formatter).await?,
    }

    Ok(())
}
