use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::RatingSnapshot;

pub fn insert_snapshot(conn: &Connection, snapshot: &RatingSnapshot) -> Result<()> {
    let sql = "INSERT INTO current_ratings (name, date, rating) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![snapshot.player_id, snapshot.date, snapshot.rating])
        .context("Failed to insert rating snapshot")?;

    Ok(())
}

fn parse_snapshot_row(row: &rusqlite::Row) -> rusqlite::Result<RatingSnapshot> {
    Ok(RatingSnapshot {
        player_id: row.get(0)?,
        date: row.get(1)?,
        rating: row.get(2)?,
    })
}

pub fn list_by_player(conn: &Connection, player: &str) -> Result<Vec<RatingSnapshot>> {
    let sql = "SELECT name, date, rating FROM current_ratings WHERE name = ?1 ORDER BY date, rowid";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player], parse_snapshot_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to load rating snapshots for {player}"))?;

    Ok(rows)
}

/// Whether the player was ever imported
pub fn has_snapshot(conn: &Connection, player: &str) -> Result<bool> {
    let sql = "SELECT 1 FROM current_ratings WHERE name = ?1 LIMIT 1";

    let found: Option<i64> = conn
        .query_row(sql, params![player], |row| row.get(0))
        .optional()
        .context("Failed to query rating snapshots")?;

    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;
    use chrono::NaiveDate;

    fn snapshot(player: &str, month: u32, rating: f64) -> RatingSnapshot {
        RatingSnapshot {
            player_id: player.to_string(),
            date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            rating,
        }
    }

    #[test]
    fn test_snapshots_come_back_in_date_order() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();

        insert_snapshot(&conn, &snapshot("Anna", 6, 6.4)).unwrap();
        insert_snapshot(&conn, &snapshot("Anna", 2, 6.9)).unwrap();
        insert_snapshot(&conn, &snapshot("Bea", 3, 8.0)).unwrap();

        let rows = list_by_player(&conn, "Anna").unwrap();
        assert_eq!(rows, vec![snapshot("Anna", 2, 6.9), snapshot("Anna", 6, 6.4)]);
        assert!(has_snapshot(&conn, "Bea").unwrap());
        assert!(!has_snapshot(&conn, "Cleo").unwrap());
    }
}
