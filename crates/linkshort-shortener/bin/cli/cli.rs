use clap::Parser;

pub const SEED_ENV: &str = "LINKSHORT_SEED";

#[derive(Debug, Parser)]
#[command(name = "linkshort", about = "Interactive in-memory URL shortener")]
pub struct CLI {
    /// Seed for the short code generator. Draws from OS entropy when unset.
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,
}
