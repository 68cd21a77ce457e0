//! PostgreSQL integration for the Vasari gallery.
//!
//! This crate provides the Diesel schema, row models, connection
//! management, and the repository implementation backing the gallery query
//! service.
//!
//! # Example
//!
//! ```rust,ignore
//! use vasari_core::VisibilityFilter;
//! use vasari_database::{GalleryRepository, PostgresGalleryRepository, establish_connection};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut conn = establish_connection()?;
//! let mut repo = PostgresGalleryRepository::new(&mut conn);
//! let newest = repo.fetch_page(VisibilityFilter::VisibleOnly, 0, 50)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod connection;
mod gallery_repository;
mod models;

pub mod schema;

pub use config::{DEFAULT_POOL_SIZE, DatabaseConfig};
pub use connection::{DbPool, create_pool, establish_connection};
pub use gallery_repository::{GalleryRepository, PostgresGalleryRepository};
pub use models::{
    GenerationRow, JoinedGeneration, ModelRow, NegativePromptRow, PromptRow, SchedulerRow,
    compose_generation,
};

// Re-exported so downstream crates and tests don't need a direct diesel
// dependency to hold a connection.
pub use diesel::pg::PgConnection;

use vasari_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;
