use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "refoodify-probe")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Integration smoke tests for the Refoodify external APIs")]
pub struct Cli {
    /// Read API keys from this JSON file instead of the default location
    #[arg(long = "secrets-file", value_name = "PATH")]
    pub secrets_file: Option<PathBuf>,

    /// Run only probes whose name contains this string (case-insensitive)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Option<String>,

    /// List registered probe names and exit
    #[arg(long = "list")]
    pub list: bool,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = crate::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
