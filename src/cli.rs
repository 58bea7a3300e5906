use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gdc-parity",
    version,
    about = "Check WCMP2 record parity between Global Discovery Catalogues"
)]
pub struct Cli {
    /// Centre id prefix naming the implementation under test.
    pub centre_id: String,

    /// Directory containing the catalogue directories.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Print diffs on a single line.
    #[arg(long)]
    pub compact: bool,
}

/// Parse arguments, exiting with status 1 on a usage error. Help and version
/// requests still exit 0; clap's default usage-error status of 2 is overridden
/// to keep the historical exit-code contract.
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
