#![allow(clippy::missing_errors_doc)]

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{
    data::{DEFAULT_BACKEND_URL, power::POWER_DAILY_POINT_URL},
    domain::{Location, MAX_LOCATIONS},
};

pub const DEFAULT_EXPORT_FILE: &str = "weather_report.txt";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeArg {
    #[default]
    Light,
    Dark,
}

impl ThemeArg {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "climate-compare",
    version,
    about = "Compare daily NASA POWER climate series for two locations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the backend proxy in front of NASA POWER
    Serve(ServeArgs),
    /// Open the comparison dashboard
    Dashboard(DashboardArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// NASA POWER daily point endpoint
    #[arg(long, env = "CLIMATE_COMPARE_UPSTREAM_URL", default_value = POWER_DAILY_POINT_URL)]
    pub upstream_url: String,
}

impl ServeArgs {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Args, Clone)]
pub struct DashboardArgs {
    /// Location to compare as LAT,LON (repeat for a second one)
    #[arg(long = "location", value_name = "LAT,LON", allow_hyphen_values = true)]
    pub locations: Vec<Location>,

    /// POWER parameter code
    #[arg(long, default_value = "T2M")]
    pub parameter: String,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub start: String,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub end: String,

    /// Values strictly above this count as exceedances
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: Option<f64>,

    /// Base URL of the backend proxy
    #[arg(long, env = "CLIMATE_COMPARE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Theme override (otherwise the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Where the report export is written
    #[arg(long)]
    pub export_path: Option<PathBuf>,

    /// Print the summary to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl DashboardArgs {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.locations.len() > MAX_LOCATIONS {
            anyhow::bail!("at most {MAX_LOCATIONS} --location values can be compared");
        }
        Ok(())
    }

    #[must_use]
    pub fn export_path_or_default(&self) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE))
    }

    #[must_use]
    pub fn threshold_text(&self) -> String {
        self.threshold.map(|t| t.to_string()).unwrap_or_default()
    }
}
