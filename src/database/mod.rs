pub mod connection;
pub mod matches;
pub mod ratings;
pub mod setup;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteMatchStore;

use anyhow::Result;

/// Pool over the database file with the schema in place
pub fn open(database_path: &str) -> Result<DbPool> {
    let pool = create_pool(database_path)?;
    let conn = get_connection(&pool)?;
    setup::ensure_schema(&conn)?;
    Ok(pool)
}
