use anyhow::{Context, Result};
use clap::Parser;
use picroll::cli::{self, Cli};
use picroll::{util, Config, Gallery};
use std::fs::{self, OpenOptions};

fn main() -> Result<()> {
    let args = Cli::parse();
    util::init_data_dir(args.data_dir);

    // Initialize logging to file (~/.picroll/logs/picroll.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config = Config::load();
    let mut gallery = Gallery::open_default(&config).with_context(|| {
        format!(
            "Failed to open gallery in {}",
            util::data_dir().display()
        )
    })?;

    let stdout = std::io::stdout();
    cli::execute(&mut gallery, args.command, &mut stdout.lock())
}
