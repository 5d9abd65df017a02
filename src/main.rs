use anyhow::Result;
use clap::Parser;
use roster::cli::{self, Cli};
use roster::{util, App, Config};
use std::fs::{self, OpenOptions};

fn main() -> Result<()> {
    let args = Cli::parse();
    util::init_data_dir(args.data_dir);

    // Initialize logging to file (~/.roster/logs/roster.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = Config::load();

    match args.command {
        Some(command) => cli::run(command, &config, &mut std::io::stdout().lock()),
        None => App::from_config(config).run(),
    }
}
