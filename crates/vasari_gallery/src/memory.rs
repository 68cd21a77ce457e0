//! In-memory generation store.

use crate::store::GenerationStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use vasari_core::{GenerationRecord, VisibilityFilter};
use vasari_database::DatabaseResult;

#[derive(Debug, Clone)]
struct StoredGeneration {
    record: GenerationRecord,
    hidden: bool,
}

/// In-memory implementation of [`GenerationStore`].
///
/// Mirrors the table semantics the Postgres store relies on: visibility
/// set-membership on the stored `hidden` flag, `created_at` descending
/// order, offset/limit slicing. Intended for tests and offline development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGenerationStore {
    rows: Arc<RwLock<Vec<StoredGeneration>>>,
}

impl InMemoryGenerationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record together with the visibility flag its row would carry.
    pub async fn insert(&self, record: GenerationRecord, hidden: bool) {
        self.rows
            .write()
            .await
            .push(StoredGeneration { record, hidden });
    }

    /// Number of stored records, across both visibility states.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl GenerationStore for InMemoryGenerationStore {
    async fn fetch_page(
        &self,
        filter: VisibilityFilter,
        offset: i64,
        limit: i64,
    ) -> DatabaseResult<Vec<GenerationRecord>> {
        let rows = self.rows.read().await;
        let mut matching: Vec<&StoredGeneration> = rows
            .iter()
            .filter(|row| filter.hidden_states().contains(&row.hidden))
            .collect();
        matching.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));

        Ok(matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|row| row.record.clone())
            .collect())
    }

    async fn fetch_by_id(&self, generation_id: &str) -> DatabaseResult<Option<GenerationRecord>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.record.id == generation_id)
            .map(|row| row.record.clone()))
    }
}
