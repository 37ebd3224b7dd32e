use clap::Parser;
use encryptdir::config::Cli;
use encryptdir::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    encryptdir::commands::sync::run(config)?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
