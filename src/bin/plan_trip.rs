// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plans a single trip from the command line and prints the itineraries.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, TimeZone};
use clap::Parser;
use tracing::info;

use healthnav_planner::client::{OtpClient, RoutingBackend};
use healthnav_planner::config::Config;
use healthnav_planner::models::{Coordinate, LegMode, TransportMode};
use healthnav_planner::preferences::{
    active_modes, default_mode_preferences, ensure_range_constraints, ModePreference,
};
use healthnav_planner::trip::build_trip_request;
use healthnav_planner::tuning::apply_auto_constraints;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a multimodal trip", long_about = None)]
struct Args {
    /// Origin as "<lat>,<lon>"
    #[arg(long)]
    from: Coordinate,

    /// Destination as "<lat>,<lon>"
    #[arg(long)]
    to: Coordinate,

    /// Departure as "YYYY-MM-DD HH:MM" in local time (defaults to now)
    #[arg(long)]
    depart: Option<String>,

    /// Transport modes to enable (walk, bike, transit, car); defaults to
    /// walk, bike and transit
    #[arg(long = "mode", value_delimiter = ',')]
    modes: Vec<TransportMode>,

    /// Automatically tune distance ranges around the preferred mode
    #[arg(long)]
    auto: bool,

    /// Preferred mode used by automatic tuning
    #[arg(long, default_value = "walk")]
    prefer: TransportMode,

    /// Print the request URL without calling the backend
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    config: Option<String>,
}

fn parse_departure(depart: Option<&str>) -> Result<chrono::DateTime<Local>> {
    match depart {
        None => Ok(Local::now()),
        Some(raw) => {
            let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
                .context("departure must be formatted as YYYY-MM-DD HH:MM")?;
            Local
                .from_local_datetime(&naive)
                .single()
                .context("departure time is ambiguous in the local time zone")
        }
    }
}

fn mode_preferences(modes: &[TransportMode]) -> Vec<ModePreference> {
    if modes.is_empty() {
        return default_mode_preferences();
    }
    modes
        .iter()
        .map(|&mode| ModePreference::new(mode, true))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = Config::load(args.config.clone())?;

    let preferences = mode_preferences(&args.modes);
    let modes = active_modes(&preferences);
    let mut ranges = ensure_range_constraints(Vec::new(), &modes);
    if args.auto {
        ranges = apply_auto_constraints(ranges, args.prefer);
    }

    let depart_at = parse_departure(args.depart.as_deref())?;
    let request = build_trip_request(depart_at, Some(args.from), Some(args.to), &preferences, &ranges)?;

    let client = OtpClient::new(config.backend)?;
    if args.dry_run {
        println!("{}", client.request_url(&request)?);
        return Ok(());
    }

    info!(modes = %request.mode_param(), "planning trip");
    let plan = client.plan_trip(&request).await?;

    if plan.itineraries.is_empty() {
        println!("No itineraries found.");
        return Ok(());
    }

    for (index, itinerary) in plan.itineraries.iter().enumerate() {
        let minutes = itinerary.duration / 60.0;
        let walk_km = itinerary.distance_for(LegMode::Walk) / 1000.0;
        let bike_km = itinerary.distance_for(LegMode::Bicycle) / 1000.0;
        println!(
            "{}. {:.0} min, {} transfers, {:.1} km on foot, {:.1} km by bike",
            index + 1,
            minutes,
            itinerary.transfers,
            walk_km,
            bike_km
        );
        for leg in &itinerary.legs {
            println!(
                "     {:?}: {} -> {} ({:.0} m)",
                leg.mode, leg.from_place.name, leg.to_place.name, leg.distance
            );
        }
    }

    Ok(())
}
