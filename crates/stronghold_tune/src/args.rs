// crates/stronghold_tune/src/args.rs
//
// Deterministic, offline CLI argument parsing for the parameter-search
// utility. No networked paths, no OS RNG: the only source of randomness
// is the `--seed` value fed into `StrongholdRng`.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "stronghold-tune", about = "Offline search over the Stronghold scoring parameters")]
pub struct Args {
    /// Number of mutate-and-compare rounds to run.
    #[arg(long, default_value_t = 200)]
    pub iterations: u64,

    /// Seed for the reproducible mutation RNG.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of leading throws per test case to feed the session before
    /// scoring (mirrors evaluating after N throws rather than only one).
    #[arg(long, default_value_t = 1)]
    pub throws: usize,

    /// Suppress per-improvement progress lines.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug)]
pub enum CliError {
    BadThrowCount(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::BadThrowCount(n) => write!(f, "--throws must be at least 1, got {n}"),
        }
    }
}
impl std::error::Error for CliError {}

pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    if args.throws == 0 {
        return Err(CliError::BadThrowCount(args.throws));
    }
    Ok(args)
}
