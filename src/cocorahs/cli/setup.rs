use chrono::NaiveDateTime;
use clap::Parser;
use cocorahs::model::{parse_observation_time, Precipitation};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cocorahs", bin_name = "cocorahs", version)]
#[command(
    about = "Report PRECIPITATION amount to CoCoRaHS. Enter T for trace amounts.",
    long_about = None
)]
pub struct Cli {
    /// The CoCoRaHS station code
    #[arg(long, value_name = "CODE")]
    pub station: Option<String>,

    /// Your CoCoRaHS username
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Your CoCoRaHS password
    #[arg(long, value_name = "SECRET")]
    pub password: Option<String>,

    /// When the gauge was read (YYYY-MM-DDTHH:MM[:SS], local time); defaults to now
    #[arg(long, value_name = "DATETIME", value_parser = parse_observation_time)]
    pub observed_at: Option<NaiveDateTime>,

    /// Read defaults from this file instead of the per-user config.ini
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Alternate API root
    #[arg(long, value_name = "URL", hide = true)]
    pub api_url: Option<String>,

    /// Amount in inches, or T for a trace amount
    #[arg(value_name = "PRECIPITATION")]
    pub precipitation: Option<Precipitation>,
}
