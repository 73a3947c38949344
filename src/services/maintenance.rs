use anyhow::Result;
use log::info;

use crate::database::{self, DbPool};

pub struct MaintenanceService {
    pool: DbPool,
}

impl MaintenanceService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Drops re-scraped copies of the same match; returns the number of rows removed
    pub fn remove_duplicates(&self) -> Result<usize> {
        let conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&conn)?;

        let before = database::matches::count_all(&conn)?;
        let removed = database::matches::remove_duplicates(&conn)?;
        info!("Duplicates removed from matches: {} of {} rows", removed, before);

        Ok(removed)
    }
}
