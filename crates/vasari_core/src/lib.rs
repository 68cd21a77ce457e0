//! Core domain types for the Vasari gallery.
//!
//! A gallery exposes rows from the `generation_g` table, each one recording
//! a single image-generation invocation. The database keeps the prompt,
//! negative prompt, model, and scheduler in lookup tables; the types here
//! describe the flat, joined shape consumers receive.
//!
//! These types are deliberately free of database machinery so they can be
//! produced by any backing store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generation;
mod identifier;
mod page;
mod visibility;

pub use generation::{GalleryModel, GalleryScheduler, GenerationRecord, NegativePrompt, Prompt};
pub use identifier::{ModelId, SchedulerId};
pub use page::GalleryPage;
pub use visibility::VisibilityFilter;
