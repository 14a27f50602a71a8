use crate::domain::model::{DEFAULT_TITLE, DEFAULT_VOLUME};
use crate::utils::logger::LogFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "home-theater")]
#[command(about = "Starts a movie on the home theater with a single call")]
pub struct CliConfig {
    /// Movie title handed to the DVD player and the projector
    #[arg(long, default_value = DEFAULT_TITLE, allow_hyphen_values = true)]
    pub title: String,

    /// Volume the amplifier starts at
    #[arg(long, default_value_t = DEFAULT_VOLUME, allow_negative_numbers = true)]
    pub volume: i32,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Print the planned choreography as JSON instead of running it
    #[arg(long)]
    pub dry_run: bool,
}
