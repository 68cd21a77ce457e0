//! Store abstraction over the generation table.

use async_trait::async_trait;
use vasari_core::{GenerationRecord, VisibilityFilter};
use vasari_database::{DatabaseResult, DbPool, GalleryRepository, PostgresGalleryRepository};
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Read access to generation records, independent of the backing store.
///
/// The service issues its page and peek fetches through this seam so the
/// pagination logic runs unchanged against Postgres or the in-memory store.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Fetch a window of records matching `filter`, newest first.
    async fn fetch_page(
        &self,
        filter: VisibilityFilter,
        offset: i64,
        limit: i64,
    ) -> DatabaseResult<Vec<GenerationRecord>>;

    /// Fetch at most one record by exact id.
    async fn fetch_by_id(&self, generation_id: &str) -> DatabaseResult<Option<GenerationRecord>>;
}

/// PostgreSQL-backed store using a connection pool.
///
/// Each call checks a connection out of the pool inside `spawn_blocking`,
/// so two in-flight fetches run on separate connections instead of
/// serializing on one.
#[derive(Debug, Clone)]
pub struct PostgresGenerationStore {
    pool: DbPool,
}

impl PostgresGenerationStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationStore for PostgresGenerationStore {
    async fn fetch_page(
        &self,
        filter: VisibilityFilter,
        offset: i64,
        limit: i64,
    ) -> DatabaseResult<Vec<GenerationRecord>> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
            PostgresGalleryRepository::new(&mut conn).fetch_page(filter, offset, limit)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(format!("task join error: {e}"))))?
    }

    async fn fetch_by_id(&self, generation_id: &str) -> DatabaseResult<Option<GenerationRecord>> {
        let pool = self.pool.clone();
        let generation_id = generation_id.to_string();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
            PostgresGalleryRepository::new(&mut conn).fetch_by_id(&generation_id)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(format!("task join error: {e}"))))?
    }
}
