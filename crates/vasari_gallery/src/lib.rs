//! Read-only query service over the Vasari generation gallery.
//!
//! Two operations: paginated listing with a concurrent look-ahead fetch
//! that decides whether a further page exists, and single-record lookup by
//! id. Both resolve the prompt, negative prompt, model, and scheduler
//! joins into flat [`vasari_core::GenerationRecord`]s.
//!
//! The service runs against any [`GenerationStore`]: Postgres through a
//! connection pool in production, or the in-memory store in tests and
//! offline development.

mod memory;
mod service;
mod store;

pub use memory::InMemoryGenerationStore;
pub use service::{BATCH, GalleryService};
pub use store::{GenerationStore, PostgresGenerationStore};
