use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use geo::geometry::Coord;
use std::str::FromStr;

/// Evaluate terrain clearance of a point-to-point radio link.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Link frequency, in GHz.
    #[arg(short, long)]
    pub frequency: f64,

    /// First tower, as "lat,lon".
    #[arg(long)]
    pub start: LatLon,

    /// Second tower, as "lat,lon".
    #[arg(long)]
    pub dest: LatLon,

    /// Number of path segments to sample for elevation.
    #[arg(short, long, default_value_t = elevation::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Elevation lookup timeout, in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Base URL of an Open-Elevation compatible service.
    #[arg(long, default_value = elevation::DEFAULT_BASE_URL)]
    pub elevation_url: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        Ok(Self(Coord { x: lon, y: lat }))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the clear/obstructed verdict.
    Report,

    /// Print the processed profile to stdout.
    Csv,

    /// Print the zone and processed profile as JSON.
    Json,

    /// Plot terrain against the zone's lower edge in the terminal.
    Plot,

    /// Print the zone outline as "lat,lon" rows.
    Polygon,
}
