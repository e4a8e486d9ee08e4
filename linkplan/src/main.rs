mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use elevation::{OpenElevation, Profile, Provenance};
use fresnel::{is_obstructed, min_clearance_m, polygonize, FresnelZone};
use options::{Cli, Command as CliCmd};
use serde::Serialize;
use std::{io::Write, time::Duration};
use textplots::{Chart, Plot, Shape};

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();
    let Cli {
        frequency,
        start,
        dest,
        samples,
        timeout,
        elevation_url,
        cmd,
    } = cli;

    env_logger::init();

    let source = OpenElevation::with_base_url(elevation_url);
    let profile = Profile::builder()
        .start(start.0)
        .end(dest.0)
        .samples(samples)
        .timeout(Duration::from_secs(timeout))
        .build(&source)
        .await?;

    if profile.provenance == Provenance::Synthetic {
        eprintln!("elevation service unavailable; using synthetic placeholder terrain");
    }

    let zone = FresnelZone::builder()
        .freq_ghz(frequency)
        .start(start.0)
        .end(dest.0)
        .profile(profile)
        .build()?;

    match cmd {
        CliCmd::Report => print_report(&zone),
        CliCmd::Csv => print_csv(&zone)?,
        CliCmd::Json => print_json(&zone)?,
        CliCmd::Plot => plot_ascii(&zone),
        CliCmd::Polygon => print_polygon(&zone)?,
    };

    Ok(())
}

fn print_report(zone: &FresnelZone) {
    let points = zone.profile.as_deref().unwrap_or(&[]);

    println!("path distance:      {:.1} m", zone.width_m);
    println!("max fresnel radius: {:.2} m", zone.height_m / 2.0);
    if let Some(clearance_m) = min_clearance_m(points) {
        println!("worst clearance:    {clearance_m:.2} m");
    }

    if is_obstructed(points) {
        println!("OBSTRUCTED: terrain intrudes into the Fresnel zone; signal quality may be affected");
    } else {
        println!("CLEAR: no terrain obstructions detected; optimal signal propagation expected");
    }
}

fn print_csv(zone: &FresnelZone) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "distance_m,elevation_m,fresnel_radius_m,clearance_m")?;
    for point in zone.profile.as_deref().unwrap_or(&[]) {
        writeln!(
            stdout,
            "{},{},{},{}",
            point.distance_m,
            point.elevation_m,
            point.fresnel_radius_m,
            point.clearance_m.unwrap_or(f64::NAN)
        )?;
    }
    Ok(())
}

fn print_json(zone: &FresnelZone) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonZone {
        center: [f64; 2],
        width_m: f64,
        height_m: f64,
        rotation_rad: f64,
        obstructed: bool,
        profile: Vec<JsonPoint>,
    }

    #[derive(Serialize)]
    struct JsonPoint {
        distance_m: f64,
        elevation_m: f64,
        fresnel_radius_m: f64,
        clearance_m: Option<f64>,
    }

    let points = zone.profile.as_deref().unwrap_or(&[]);
    let reshaped = JsonZone {
        center: [zone.center.y(), zone.center.x()],
        width_m: zone.width_m,
        height_m: zone.height_m,
        rotation_rad: zone.rotation_rad,
        obstructed: is_obstructed(points),
        profile: points
            .iter()
            .map(|point| JsonPoint {
                distance_m: point.distance_m,
                elevation_m: point.elevation_m,
                fresnel_radius_m: point.fresnel_radius_m,
                clearance_m: point.clearance_m,
            })
            .collect(),
    };

    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

fn plot_ascii(zone: &FresnelZone) {
    let points = zone.profile.as_deref().unwrap_or(&[]);

    let terrain: Vec<(f32, f32)> = points
        .iter()
        .map(|point| (point.distance_m as f32, point.elevation_m as f32))
        .collect();

    // The zone's lower boundary sits one fresnel radius below the
    // sight line, which is the terrain plus its clearance.
    let lower_edge: Vec<(f32, f32)> = points
        .iter()
        .filter_map(|point| {
            point
                .clearance_m
                .map(|clearance_m| (point.distance_m as f32, (point.elevation_m + clearance_m) as f32))
        })
        .collect();

    Chart::new(300, 150, 0.0, zone.width_m as f32)
        .lineplot(&Shape::Lines(&terrain))
        .lineplot(&Shape::Lines(&lower_edge))
        .display();
}

fn print_polygon(zone: &FresnelZone) -> Result<(), AnyError> {
    let polygon = polygonize(zone)?;
    let mut stdout = std::io::stdout().lock();
    for coord in &polygon.exterior().0 {
        writeln!(stdout, "{},{}", coord.y, coord.x)?;
    }
    Ok(())
}
