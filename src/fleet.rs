use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};

use crate::db;

#[derive(Debug, PartialEq, Eq, Tabled)]
pub struct FleetCount {
    #[tabled(rename = "Airline")]
    pub airline: String,
    #[tabled(rename = "Aircraft type")]
    pub aircraft_type: String,
    #[tabled(rename = "Count")]
    pub count: u32,
}

/// One row per non-empty (airline, aircraft type) group, counting fleet rows.
/// No ORDER BY: row order is whatever SQLite produces for the grouping.
pub fn counts(conn: &Connection) -> Result<Vec<FleetCount>> {
    let mut stmt = conn.prepare(
        "SELECT airline.name, fleet.type_id, COUNT(*)
         FROM fleet
         INNER JOIN airline ON fleet.airline_code = airline.code
         GROUP BY airline.name, fleet.type_id",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(FleetCount {
                airline: row.get(0)?,
                aircraft_type: row.get(1)?,
                count: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

pub fn report(db_path: &Path) -> Result<()> {
    let conn = db::connect(db_path)?;
    let rows = counts(&conn)?;

    println!("\nFleet aircraft per airline and aircraft type:\n");
    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    println!("{}", table);
    Ok(())
}
