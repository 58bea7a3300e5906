use anyhow::Result;
use gdc_parity::config::RunConfig;
use gdc_parity::{cli, parity};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::parse_or_exit();

    // Report output owns stdout; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig {
        root: args.dir,
        centre_id: args.centre_id,
        compact: args.compact,
    };
    parity::run(&config)
}
