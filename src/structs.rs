use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Export every history record as JSON to this file, then exit.
    #[arg(long)]
    pub export_history: Option<String>,
}
