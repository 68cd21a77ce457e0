//! Vasari - read-only query layer for an image-generation gallery.
//!
//! Vasari serves a gallery of image-generation records out of PostgreSQL:
//! bounded, newest-first pages with a look-ahead that reports whether a
//! further page exists, and single-record lookup by id. Each record is
//! returned flat, with its prompt, negative prompt, model, and scheduler
//! lookups already resolved.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vasari::{GalleryService, VisibilityFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads DATABASE_URL; an unset variable yields an unconfigured
//!     // service whose operations report ConnectionUnavailable.
//!     let service = GalleryService::from_env()?;
//!
//!     let response = service.gallery_page(1, VisibilityFilter::VisibleOnly).await?;
//!     println!("page {} of the gallery, next: {:?}", response.page, response.next);
//!
//!     let generation = service.generation("some-generation-id").await?;
//!     println!("prompt: {}", generation.prompt.text);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vasari is organized as a workspace with focused crates:
//!
//! - `vasari_core` - domain types (records, identifier sets, filters)
//! - `vasari_error` - error types
//! - `vasari_database` - Diesel schema, row models, repository
//! - `vasari_gallery` - the query service and store implementations
//!
//! This crate (`vasari`) re-exports everything for convenience.

pub use vasari_core::*;
pub use vasari_database::*;
pub use vasari_error::*;
pub use vasari_gallery::*;
