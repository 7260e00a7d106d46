use crate::cli::Cli;
use crate::domain::constants::WORLD_MAP;
use crate::domain::models::TrackReport;
use crate::services::{api, clock, output, projection, render};
use log::debug;

/// One fetch-render cycle, strictly sequential: fetch → validate → convert →
/// project → render. No retries, no state kept between runs.
pub fn handle_track(cli: &Cli) -> anyhow::Result<()> {
    let snapshot = api::load_snapshot(&cli.source)?;
    api::validate(&snapshot)?;

    let fix = api::parse_fix(&snapshot)?;
    let local_time = clock::local_time(snapshot.timestamp)?;
    let marker = projection::project(fix);
    debug!(
        "projected ({}, {}) to column {} row {}",
        fix.longitude, fix.latitude, marker.column, marker.row
    );

    if cli.json {
        return output::print_json(TrackReport {
            longitude: snapshot.iss_position.longitude.clone(),
            latitude: snapshot.iss_position.latitude.clone(),
            timestamp: snapshot.timestamp,
            local_time: clock::format_local_time(&local_time),
            marker,
        });
    }

    println!("ISS TRACKER");
    println!("Longitude: {}", snapshot.iss_position.longitude);
    println!("Latitude: {}", snapshot.iss_position.latitude);
    println!("{}", clock::format_local_time(&local_time));
    println!();
    render::print_map(&WORLD_MAP, marker, cli.plain);
    Ok(())
}
