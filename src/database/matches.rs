use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{MatchRecord, SetScore};

const MATCH_COLUMNS: &str = "player1, player2, rating1, rating2, set1_p1, set1_p2, set2_p1, set2_p2, set3_p1, set3_p2, winner, match_date";

pub fn insert_match(conn: &Connection, record: &MatchRecord) -> Result<()> {
    let sql = format!(
        "INSERT INTO matches ({MATCH_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
    );
    let [set1, set2, set3] = record.set_scores;

    conn.execute(
        &sql,
        params![
            record.player_a,
            record.player_b,
            record.rating_a,
            record.rating_b,
            set1.map(|s| s.games_a),
            set1.map(|s| s.games_b),
            set2.map(|s| s.games_a),
            set2.map(|s| s.games_b),
            set3.map(|s| s.games_a),
            set3.map(|s| s.games_b),
            record.winner,
            record.match_date,
        ],
    )
    .context("Failed to insert match")?;

    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        player_a: row.get(0)?,
        player_b: row.get(1)?,
        rating_a: row.get(2)?,
        rating_b: row.get(3)?,
        set_scores: [
            parse_set_columns(row, 4)?,
            parse_set_columns(row, 6)?,
            parse_set_columns(row, 8)?,
        ],
        winner: row.get(10)?,
        match_date: row.get(11)?,
    })
}

/// A set counts as played only when both sides' games are stored
fn parse_set_columns(row: &rusqlite::Row, first: usize) -> rusqlite::Result<Option<SetScore>> {
    let games_a: Option<u8> = row.get(first)?;
    let games_b: Option<u8> = row.get(first + 1)?;
    Ok(games_a.zip(games_b).map(|(a, b)| SetScore::new(a, b)))
}

/// Matches `player` took part in between `start` and `end` inclusive, oldest first
pub fn list_for_player_between(
    conn: &Connection,
    player: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<MatchRecord>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE (player1 = ?1 OR player2 = ?1) AND match_date BETWEEN ?2 AND ?3 ORDER BY match_date, rowid"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player, start, end], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to load matches for {player}"))?;

    Ok(rows)
}

/// Whether `player` has any stored match, on either side and at any date
pub fn has_player(conn: &Connection, player: &str) -> Result<bool> {
    let sql = "SELECT 1 FROM matches WHERE player1 = ?1 OR player2 = ?1 LIMIT 1";

    let found: Option<i64> = conn
        .query_row(sql, params![player], |row| row.get(0))
        .optional()
        .with_context(|| format!("Failed to look up matches for {player}"))?;

    Ok(found.is_some())
}

pub fn count_all(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))
        .context("Failed to count matches")?;
    Ok(count as usize)
}

/// Keeps the oldest row of every (players, ratings) group and returns how many were deleted
pub fn remove_duplicates(conn: &Connection) -> Result<usize> {
    let sql = "
        DELETE FROM matches
        WHERE rowid NOT IN (
            SELECT MIN(rowid)
            FROM matches
            GROUP BY player1, player2, rating1, rating2
        )
    ";

    conn.execute(sql, [])
        .context("Failed to remove duplicate matches")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn record(a: &str, b: &str, on: (i32, u32, u32)) -> MatchRecord {
        MatchRecord {
            player_a: a.to_string(),
            player_b: b.to_string(),
            rating_a: 6.5,
            rating_b: 7.25,
            set_scores: [Some(SetScore::new(6, 4)), Some(SetScore::new(6, 7)), None],
            winner: a.to_string(),
            match_date: NaiveDate::from_ymd_opt(on.0, on.1, on.2).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_and_read_back() {
        let conn = conn();
        let original = record("Anna", "Bea", (2022, 7, 9));
        insert_match(&conn, &original).unwrap();

        let rows = list_for_player_between(&conn, "Anna", date(2022, 1, 1), date(2022, 12, 31)).unwrap();
        assert_eq!(rows, vec![original]);
    }

    #[test]
    fn test_list_matches_either_side_within_inclusive_range() {
        let conn = conn();
        insert_match(&conn, &record("Anna", "Bea", (2022, 1, 1))).unwrap();
        insert_match(&conn, &record("Cleo", "Anna", (2022, 12, 31))).unwrap();
        insert_match(&conn, &record("Anna", "Dora", (2023, 1, 1))).unwrap();
        insert_match(&conn, &record("Bea", "Cleo", (2022, 6, 1))).unwrap();

        let rows = list_for_player_between(&conn, "Anna", date(2022, 1, 1), date(2022, 12, 31)).unwrap();
        let opponents: Vec<&str> = rows.iter().map(|r| r.player_b.as_str()).collect();
        assert_eq!(opponents, vec!["Bea", "Anna"]);
    }

    #[test]
    fn test_half_stored_set_reads_as_unplayed() {
        let conn = conn();
        insert_match(&conn, &record("Anna", "Bea", (2022, 3, 3))).unwrap();
        conn.execute("UPDATE matches SET set2_p2 = NULL", []).unwrap();

        let rows = list_for_player_between(&conn, "Bea", date(2022, 1, 1), date(2022, 12, 31)).unwrap();
        assert_eq!(rows[0].set_scores[1], None);
        assert_eq!(rows[0].set_scores[0], Some(SetScore::new(6, 4)));
    }

    #[test]
    fn test_has_player_ignores_dates_and_sides() {
        let conn = conn();
        insert_match(&conn, &record("Anna", "Bea", (2019, 2, 2))).unwrap();

        assert!(has_player(&conn, "Anna").unwrap());
        assert!(has_player(&conn, "Bea").unwrap());
        assert!(!has_player(&conn, "Cleo").unwrap());
        assert!(list_for_player_between(&conn, "Bea", date(2020, 1, 1), date(2020, 12, 31)).unwrap().is_empty());
    }

    #[test]
    fn test_remove_duplicates_keeps_first_copy() {
        let conn = conn();
        let first = record("Anna", "Bea", (2022, 5, 5));
        let mut rescraped = first.clone();
        rescraped.match_date = date(2022, 5, 6);

        insert_match(&conn, &first).unwrap();
        insert_match(&conn, &rescraped).unwrap();
        insert_match(&conn, &first).unwrap();
        insert_match(&conn, &record("Anna", "Cleo", (2022, 5, 7))).unwrap();

        assert_eq!(remove_duplicates(&conn).unwrap(), 2);
        assert_eq!(count_all(&conn).unwrap(), 2);

        let rows = list_for_player_between(&conn, "Anna", date(2022, 1, 1), date(2022, 12, 31)).unwrap();
        assert_eq!(rows[0], first);
        assert_eq!(remove_duplicates(&conn).unwrap(), 0);
    }
}
