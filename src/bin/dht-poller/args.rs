use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// appsettings-style JSON file
    #[arg(long, env = "DHT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "DHT_API_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "DHT_API_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,

    /// Print readings as a JSON array
    #[arg(long)]
    pub json: bool,
}
