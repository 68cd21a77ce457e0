//! The gallery query service.

use crate::store::{GenerationStore, PostgresGenerationStore};
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use vasari_core::{GalleryPage, GenerationRecord, VisibilityFilter};
use vasari_database::{DatabaseConfig, create_pool};
use vasari_error::{GalleryError, GalleryErrorKind, GalleryResult, VasariResult};

/// Records returned per gallery page.
pub const BATCH: i64 = 50;

/// Offset of the first record on `page`.
fn page_offset(page: u32) -> i64 {
    (i64::from(page) - 1) * BATCH
}

/// Offset of the peek record one batch past `page`.
fn peek_offset(page: u32) -> i64 {
    i64::from(page) * BATCH
}

/// The next page number, derived from how many rows the peek returned.
fn next_page(page: u32, peeked: usize) -> Option<u32> {
    (peeked > 0).then(|| page + 1)
}

/// Read-only query service over the generation gallery.
///
/// Holds an optional store: a service built without one reports
/// `ConnectionUnavailable` from every operation instead of panicking, so an
/// unconfigured database degrades the same way for every caller.
#[derive(Debug, Clone)]
pub struct GalleryService<S> {
    store: Option<S>,
}

impl<S: GenerationStore> GalleryService<S> {
    /// Create a service over the given store.
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// Create a service with no backing store.
    ///
    /// Every operation returns `ConnectionUnavailable` without attempting a
    /// query.
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    /// Whether a backing store is configured.
    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> GalleryResult<&S> {
        self.store.as_ref().ok_or_else(|| {
            error!("no database connection configured");
            GalleryError::new(GalleryErrorKind::ConnectionUnavailable)
        })
    }

    /// Fetch one gallery page under the given visibility filter.
    ///
    /// Issues the page fetch and a single-row peek one batch ahead
    /// concurrently and waits for both; the peek only decides whether a
    /// further page exists. Page numbers are 1-indexed; anything lower is
    /// treated as the first page.
    ///
    /// # Errors
    ///
    /// `ConnectionUnavailable` without a configured store; `Query` when
    /// either fetch fails. No partial results are returned.
    #[instrument(skip(self))]
    pub async fn gallery_page(
        &self,
        page: u32,
        filter: VisibilityFilter,
    ) -> GalleryResult<GalleryPage> {
        let store = self.store()?;
        let page = page.max(1);
        let start = Instant::now();
        info!(page, %filter, "gallery page requested");

        let (generations, peek) = tokio::try_join!(
            store.fetch_page(filter, page_offset(page), BATCH),
            store.fetch_page(filter, peek_offset(page), 1)
        )
        .map_err(|e| {
            error!(page, error = %e, "error getting generations");
            GalleryError::from(e)
        })?;

        let next = next_page(page, peek.len());
        info!(
            page,
            next,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "gallery page response"
        );

        Ok(GalleryPage {
            generations,
            page,
            next,
        })
    }

    /// Fetch one gallery page with the default visible-only filter.
    ///
    /// # Errors
    ///
    /// Same as [`GalleryService::gallery_page`].
    pub async fn gallery_page_default(&self, page: u32) -> GalleryResult<GalleryPage> {
        self.gallery_page(page, VisibilityFilter::default()).await
    }

    /// Fetch a single generation by exact id.
    ///
    /// # Errors
    ///
    /// `ConnectionUnavailable` without a configured store; `NotFound` when
    /// no record matches; `Query` on data-layer failure.
    #[instrument(skip(self))]
    pub async fn generation(&self, generation_id: &str) -> GalleryResult<GenerationRecord> {
        let store = self.store()?;
        debug!(generation_id, "generation requested");

        let found = store.fetch_by_id(generation_id).await.map_err(|e| {
            error!(generation_id, error = %e, "error getting generation");
            GalleryError::from(e)
        })?;

        found.ok_or_else(|| GalleryError::new(GalleryErrorKind::NotFound))
    }
}

impl GalleryService<PostgresGenerationStore> {
    /// Build a Postgres-backed service from the environment.
    ///
    /// An absent `DATABASE_URL` yields an unconfigured service rather than
    /// an error; operations then report `ConnectionUnavailable`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed environment values, or a
    /// database error when the pool cannot be built.
    pub fn from_env() -> VasariResult<Self> {
        match DatabaseConfig::from_env()? {
            Some(config) => {
                let pool = create_pool(&config)?;
                Ok(Self::new(PostgresGenerationStore::new(pool)))
            }
            None => Ok(Self::unconfigured()),
        }
    }
}
