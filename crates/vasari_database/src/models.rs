//! Diesel row models and record composition.

use crate::DatabaseResult;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use vasari_core::{
    GalleryModel, GalleryScheduler, GenerationRecord, ModelId, NegativePrompt, Prompt, SchedulerId,
};
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Database row for the `generation_g` table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::generation_g)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenerationRow {
    pub id: String,
    pub width: i32,
    pub height: i32,
    pub prompt_id: String,
    pub negative_prompt_id: Option<String>,
    pub model_id: String,
    pub scheduler_id: String,
    pub seed: i64,
    pub inference_steps: i32,
    pub guidance_scale: f64,
    pub image_id: String,
    pub hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the `prompt` lookup table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::prompt)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PromptRow {
    pub id: String,
    pub text: String,
}

/// Database row for the `negative_prompt` lookup table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::negative_prompt)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NegativePromptRow {
    pub id: String,
    pub text: String,
}

/// Database row for the `model` lookup table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::model)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ModelRow {
    pub id: String,
    pub name: String,
}

/// Database row for the `scheduler` lookup table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::scheduler)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SchedulerRow {
    pub id: String,
    pub name: String,
}

/// The five-way join row: a generation plus its resolved lookups.
pub type JoinedGeneration = (
    GenerationRow,
    PromptRow,
    Option<NegativePromptRow>,
    ModelRow,
    SchedulerRow,
);

/// Compose a joined row into the flat gallery record.
///
/// The row's `hidden` flag drives query filtering and is not carried over.
///
/// # Errors
///
/// Returns a `Serialization` error when the model or scheduler id falls
/// outside the deployed identifier sets.
pub fn compose_generation(row: JoinedGeneration) -> DatabaseResult<GenerationRecord> {
    let (generation, prompt, negative_prompt, model_row, scheduler_row) = row;

    let model_id = model_row.id.parse::<ModelId>().map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "unknown model id '{}'",
            model_row.id
        )))
    })?;
    let scheduler_id = scheduler_row.id.parse::<SchedulerId>().map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Serialization(format!(
            "unknown scheduler id '{}'",
            scheduler_row.id
        )))
    })?;

    Ok(GenerationRecord {
        id: generation.id,
        width: generation.width,
        height: generation.height,
        prompt: Prompt {
            id: prompt.id,
            text: prompt.text,
        },
        negative_prompt: negative_prompt.map(|np| NegativePrompt {
            id: np.id,
            text: np.text,
        }),
        model: GalleryModel {
            id: model_id,
            name: model_row.name,
        },
        scheduler: GalleryScheduler {
            id: scheduler_id,
            name: scheduler_row.name,
        },
        seed: generation.seed,
        inference_steps: generation.inference_steps,
        guidance_scale: generation.guidance_scale,
        image_id: generation.image_id,
        created_at: generation.created_at,
        updated_at: generation.updated_at,
    })
}
