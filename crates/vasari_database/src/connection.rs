//! Database connection utilities.

use crate::{DatabaseConfig, DatabaseResult};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::debug;
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Connection pool over the gallery database.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Establish a single connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the
/// connection string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> DatabaseResult<PgConnection> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;

    PgConnection::establish(&database_url)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
}

/// Build a connection pool from the given configuration.
///
/// The pool is warmed with one checkout so a bad connection string fails
/// here instead of on the first query.
///
/// # Errors
///
/// Returns a `Connection` error when the pool cannot be built or the
/// warm-up checkout fails.
pub fn create_pool(config: &DatabaseConfig) -> DatabaseResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.url().as_str());
    let pool = Pool::builder()
        .max_size(*config.pool_size())
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

    {
        let _conn = pool
            .get()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
    }

    debug!(pool_size = *config.pool_size(), "database pool ready");
    Ok(pool)
}
