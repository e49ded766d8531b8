use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;
use log::info;
use rustyline::DefaultEditor;

use crate::routes::Direction;

mod db;
mod fleet;
mod routes;
mod weekday;

#[derive(Parser)]
struct Args {
    /// Path to the SQLite database file, recreated on every start
    #[arg(long, value_name = "FILE", default_value = "flights.sqlite")]
    database: PathBuf,
    /// Path to the SQL script with the schema and seed rows
    #[arg(long, value_name = "FILE", default_value = "data/setup_flights.sql")]
    setup_script: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    db::initialize(&args.database, &args.setup_script)?;
    fleet::report(&args.database)?;
    collect_and_resolve(&args.database)?;
    Ok(())
}

/// Prompts for a weekday, an airport and a direction, then prints the matching
/// itineraries. Single-shot: bad airport or direction input gets one notice
/// and the program ends, an unknown weekday name aborts the run.
fn collect_and_resolve(db_path: &Path) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let weekday_names: Vec<&str> = weekday::names().collect();
    println!(
        "\nFor which weekday do you want to check flight routes? ({})\n",
        weekday_names.join(", ")
    );
    let weekday_input = rl.readline("> ")?;
    let weekday = weekday::number_from_name(&weekday_input)
        .ok_or_else(|| anyhow!("unrecognized weekday name: {:?}", weekday_input.trim()))?;

    // Scoped connection for the airport lists, dropped before the next prompt.
    let (origins, destinations) = {
        let conn = db::connect(db_path)?;
        (
            routes::distinct_origins(&conn)?,
            routes::distinct_destinations(&conn)?,
        )
    };

    println!("\nFor which airport do you want to check journeys? (type an airport code)\n");
    println!("Airports with departures");
    println!("{:?}\n", origins);
    println!("Airports with arrivals");
    println!("{:?}\n", destinations);

    let airport = rl.readline("> ")?.trim().to_uppercase();

    println!("\nDo you want to check departures or arrivals? (type departure or arrival)\n");
    let direction_input = rl.readline("> ")?;

    match Direction::parse(&direction_input) {
        Some(direction) if direction.permits(&airport, &origins, &destinations) => {
            info!(
                "resolving routes for weekday {} at {} ({:?})",
                weekday, airport, direction
            );
            let conn = db::connect(db_path)?;
            let itineraries = routes::resolve(&conn, weekday, &airport, direction)?;
            routes::print_itineraries(&itineraries);
        }
        _ => println!("{}", "Invalid input".red()),
    }

    Ok(())
}
