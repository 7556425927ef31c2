mod cli;

use crate::cli::CLI;
use clap::Parser;
use linkshort_generator::RandomGenerator;
use linkshort_shortener::{Session, ShortenerService};
use linkshort_storage::InMemoryRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the command loop, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::parse();

    let generator = match config.seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::from_os_rng(),
    };
    info!(seeded = config.seed.is_some(), "starting linkshort session");

    let service = ShortenerService::new(InMemoryRepository::new(), generator);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(service).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
