//! Command-line argument definitions

use clap::Args;

/// Arguments for the props command
#[derive(Args, Debug)]
pub struct PropsArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Frame index to inspect
    #[arg(short, long, default_value = "0")]
    pub frame: usize,

    /// Show raw keys and values instead of the prettified view
    #[arg(long)]
    pub raw: bool,

    /// Force the prettified view when the session default is raw
    #[arg(long, conflicts_with = "raw")]
    pub pretty: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Persist raw mode as the session default (true/false)
    #[arg(long)]
    pub raw: Option<bool>,

    /// Persist the default logging level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Config file path (default: platform config directory)
    #[arg(long)]
    pub path: Option<String>,
}
