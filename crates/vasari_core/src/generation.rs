//! The gallery record and its joined lookup shapes.

use crate::{ModelId, SchedulerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prompt resolved from the `prompt` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Lookup table id
    pub id: String,
    /// Prompt text
    pub text: String,
}

/// A negative prompt resolved from the `negative_prompt` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativePrompt {
    /// Lookup table id
    pub id: String,
    /// Negative prompt text
    pub text: String,
}

/// A model reference resolved from the `model` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryModel {
    /// One of the deployed model identifiers
    pub id: ModelId,
    /// Human-readable model name
    pub name: String,
}

/// A scheduler reference resolved from the `scheduler` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryScheduler {
    /// One of the deployed scheduler identifiers
    pub id: SchedulerId,
    /// Human-readable scheduler name
    pub name: String,
}

/// One image-generation invocation with its parameters and resolved lookups.
///
/// The backing row carries a `hidden` flag that drives visibility filtering;
/// it is intentionally absent here and never reaches consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Unique, immutable identifier
    pub id: String,
    /// Output width in pixels
    pub width: i32,
    /// Output height in pixels
    pub height: i32,
    /// The prompt the image was generated from (always present)
    pub prompt: Prompt,
    /// The negative prompt, when one was associated
    pub negative_prompt: Option<NegativePrompt>,
    /// The model that produced the image
    pub model: GalleryModel,
    /// The scheduler used for inference
    pub scheduler: GalleryScheduler,
    /// RNG seed
    pub seed: i64,
    /// Number of inference steps
    pub inference_steps: i32,
    /// Classifier-free guidance scale
    pub guidance_scale: f64,
    /// Reference to the stored image
    pub image_id: String,
    /// Creation timestamp; the sole pagination sort key
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}
