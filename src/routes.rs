use anyhow::Result;
use indexmap::IndexMap;
use log::debug;
use rusqlite::{Connection, params};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Departure,
    Arrival,
}

impl Direction {
    /// Accepts exactly the tokens "departure" and "arrival", after trimming
    /// and lowercasing.
    pub fn parse(input: &str) -> Option<Direction> {
        match input.trim().to_lowercase().as_str() {
            "departure" => Some(Direction::Departure),
            "arrival" => Some(Direction::Arrival),
            _ => None,
        }
    }

    fn airport_column(self) -> &'static str {
        match self {
            Direction::Departure => "origin",
            Direction::Arrival => "destination",
        }
    }

    /// A departure lookup only makes sense for an airport some leg departs
    /// from, an arrival lookup for one some leg arrives at.
    pub fn permits(self, airport: &str, origins: &[String], destinations: &[String]) -> bool {
        match self {
            Direction::Departure => origins.iter().any(|code| code == airport),
            Direction::Arrival => destinations.iter().any(|code| code == airport),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub seq: u32,
    pub departure: String,
    pub arrival: String,
    pub origin: String,
    pub destination: String,
}

/// Legs matching the airport and weekday, grouped per route. Routes keep the
/// order they first appear in (ascending route number), legs keep ascending
/// sequence order within their route.
///
/// The weekday filter is a substring test against the route's weekday code,
/// exactly as the timetable has always been queried: `%3%` matches "1,3,5".
pub fn resolve(
    conn: &Connection,
    weekday: u8,
    airport: &str,
    direction: Direction,
) -> Result<IndexMap<String, Vec<Leg>>> {
    let sql = format!(
        "SELECT leg.route_number, leg.seq_no, leg.departure_time, leg.arrival_time,
                leg.origin, leg.destination
         FROM route_leg AS leg
         INNER JOIN route ON leg.route_number = route.route_number
         WHERE leg.{} = ?1 AND route.weekday_code LIKE ?2
         ORDER BY leg.route_number, leg.seq_no",
        direction.airport_column()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![airport, format!("%{}%", weekday)], |row| {
        Ok((
            row.get::<_, String>(0)?,
            Leg {
                seq: row.get(1)?,
                departure: row.get(2)?,
                arrival: row.get(3)?,
                origin: row.get(4)?,
                destination: row.get(5)?,
            },
        ))
    })?;

    let mut itineraries: IndexMap<String, Vec<Leg>> = IndexMap::new();
    for row in rows {
        let (route_number, leg) = row?;
        itineraries.entry(route_number).or_default().push(leg);
    }
    debug!(
        "{} route(s) match weekday {} at {}",
        itineraries.len(),
        weekday,
        airport
    );
    Ok(itineraries)
}

/// A route with no matching legs simply never appears; an empty map prints
/// nothing.
pub fn print_itineraries(itineraries: &IndexMap<String, Vec<Leg>>) {
    for (route_number, legs) in itineraries {
        println!("\nRoute: {}", route_number);
        for leg in legs {
            println!(
                "  {} ({}) → {} ({})",
                leg.origin, leg.departure, leg.destination, leg.arrival
            );
        }
    }
}

pub fn distinct_origins(conn: &Connection) -> Result<Vec<String>> {
    distinct_airports(conn, "SELECT DISTINCT origin FROM route_leg")
}

pub fn distinct_destinations(conn: &Connection) -> Result<Vec<String>> {
    distinct_airports(conn, "SELECT DISTINCT destination FROM route_leg")
}

fn distinct_airports(conn: &Connection, sql: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let codes = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(codes)
}
