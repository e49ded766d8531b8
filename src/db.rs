use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rusqlite::Connection;

/// Drops any database file left over from a previous run and rebuilds it by
/// executing the whole setup script (schema plus seed rows) as one batch.
///
/// A missing script or a bad statement propagates; there is no partial-success
/// recovery and a failed load leaves the run unusable.
pub fn initialize(db_path: &Path, script_path: &Path) -> Result<()> {
    if db_path.exists() {
        fs::remove_file(db_path)
            .with_context(|| format!("failed to remove stale database {}", db_path.display()))?;
        info!("removed stale database {}", db_path.display());
    }

    let script = fs::read_to_string(script_path)
        .with_context(|| format!("failed to read setup script {}", script_path.display()))?;

    let conn = connect(db_path)?;
    conn.execute_batch(&script)
        .with_context(|| format!("setup script {} failed", script_path.display()))?;
    conn.close().map_err(|(_, err)| err)?;

    info!(
        "database {} initialized from {}",
        db_path.display(),
        script_path.display()
    );
    Ok(())
}

/// Every unit of work opens its own connection and drops it on the same path;
/// no handle is shared across prompts.
pub fn connect(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir().join(format!("flightdb-{}-{}", name, std::process::id()))
    }

    const SCRIPT: &str = "CREATE TABLE airline (code TEXT PRIMARY KEY, name TEXT NOT NULL);
        INSERT INTO airline (code, name) VALUES ('SK', 'SAS');";

    #[test]
    fn test_initialize_builds_fresh_database() {
        let script_path = scratch("fresh.sql");
        let db_path = scratch("fresh.sqlite");
        fs::write(&script_path, SCRIPT).unwrap();

        initialize(&db_path, &script_path).unwrap();

        let conn = connect(&db_path).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM airline", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);

        drop(conn);
        fs::remove_file(&script_path).unwrap();
        fs::remove_file(&db_path).unwrap();
    }

    #[test]
    fn test_initialize_discards_previous_contents() {
        let script_path = scratch("rebuild.sql");
        let db_path = scratch("rebuild.sqlite");
        fs::write(&script_path, SCRIPT).unwrap();

        initialize(&db_path, &script_path).unwrap();
        let conn = connect(&db_path).unwrap();
        conn.execute(
            "INSERT INTO airline (code, name) VALUES ('DY', 'Norwegian')",
            [],
        )
        .unwrap();
        drop(conn);

        initialize(&db_path, &script_path).unwrap();
        let conn = connect(&db_path).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM airline", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);

        drop(conn);
        fs::remove_file(&script_path).unwrap();
        fs::remove_file(&db_path).unwrap();
    }

    #[test]
    fn test_missing_script_is_fatal() {
        let db_path = scratch("noscript.sqlite");
        let err = initialize(&db_path, Path::new("no-such-script.sql")).unwrap_err();
        assert!(err.to_string().contains("no-such-script.sql"));
    }

    #[test]
    fn test_invalid_statement_is_fatal() {
        let script_path = scratch("broken.sql");
        let db_path = scratch("broken.sqlite");
        fs::write(&script_path, "CREATE GARBAGE;").unwrap();

        assert!(initialize(&db_path, &script_path).is_err());

        fs::remove_file(&script_path).unwrap();
        fs::remove_file(&db_path).unwrap();
    }
}
