//! Repository for gallery reads.

use crate::DatabaseResult;
use crate::models::{
    GenerationRow, JoinedGeneration, ModelRow, NegativePromptRow, PromptRow, SchedulerRow,
    compose_generation,
};
use diesel::prelude::*;
use vasari_core::{GenerationRecord, VisibilityFilter};
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Repository trait for read access to the generation gallery.
///
/// Every fetch resolves the prompt, negative prompt, model, and scheduler
/// joins and returns composed [`GenerationRecord`]s.
pub trait GalleryRepository {
    /// Fetch a slice of records matching the visibility filter.
    ///
    /// Rows are ordered by `created_at` descending; `offset` and `limit`
    /// carve out the requested window.
    ///
    /// # Errors
    ///
    /// Returns a `Query` error when the statement fails, or a
    /// `Serialization` error when a row references an unknown model or
    /// scheduler id.
    fn fetch_page(
        &mut self,
        filter: VisibilityFilter,
        offset: i64,
        limit: i64,
    ) -> DatabaseResult<Vec<GenerationRecord>>;

    /// Fetch at most one record by exact id.
    ///
    /// # Errors
    ///
    /// Returns a `Query` error when the statement fails; an absent row is
    /// `Ok(None)`, not an error.
    fn fetch_by_id(&mut self, generation_id: &str) -> DatabaseResult<Option<GenerationRecord>>;
}

/// PostgreSQL implementation of [`GalleryRepository`].
///
/// Uses a mutable reference to PgConnection. For concurrent access, check
/// connections out of a pool and build one repository per connection.
pub struct PostgresGalleryRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PostgresGalleryRepository<'a> {
    /// Create a new repository with a mutable connection reference.
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

impl GalleryRepository for PostgresGalleryRepository<'_> {
    fn fetch_page(
        &mut self,
        filter: VisibilityFilter,
        offset: i64,
        limit: i64,
    ) -> DatabaseResult<Vec<GenerationRecord>> {
        use crate::schema::{generation_g, model, negative_prompt, prompt, scheduler};

        let rows: Vec<JoinedGeneration> = generation_g::table
            .inner_join(prompt::table)
            .left_join(negative_prompt::table)
            .inner_join(model::table)
            .inner_join(scheduler::table)
            .filter(generation_g::hidden.eq_any(filter.hidden_states().iter().copied()))
            .order(generation_g::created_at.desc())
            .offset(offset)
            .limit(limit)
            .select((
                GenerationRow::as_select(),
                PromptRow::as_select(),
                Option::<NegativePromptRow>::as_select(),
                ModelRow::as_select(),
                SchedulerRow::as_select(),
            ))
            .load(self.conn)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        rows.into_iter().map(compose_generation).collect()
    }

    fn fetch_by_id(&mut self, generation_id: &str) -> DatabaseResult<Option<GenerationRecord>> {
        use crate::schema::{generation_g, model, negative_prompt, prompt, scheduler};

        let row: Option<JoinedGeneration> = generation_g::table
            .inner_join(prompt::table)
            .left_join(negative_prompt::table)
            .inner_join(model::table)
            .inner_join(scheduler::table)
            .filter(generation_g::id.eq(generation_id))
            .select((
                GenerationRow::as_select(),
                PromptRow::as_select(),
                Option::<NegativePromptRow>::as_select(),
                ModelRow::as_select(),
                SchedulerRow::as_select(),
            ))
            .first(self.conn)
            .optional()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;

        match row {
            Some(joined) => Ok(Some(compose_generation(joined)?)),
            None => Ok(None),
        }
    }
}
