//! CLI argument parsing

use clap::Parser;

use crate::config::defaults;

/// Zammad provider plugin
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-zammad")]
#[command(version)]
#[command(
    about = "Manage Zammad organizations and ticket priorities as declarative resources",
    long_about = "Manage Zammad organizations and ticket priorities as declarative resources.\n\n\
                  Requests are read as JSON lines from stdin and answered on stdout.\n\
                  Logs are written to stderr."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "TF_LOG_PROVIDER", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
