//! Error types for the Vasari gallery query layer.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vasari_error::{ConfigError, VasariResult};
//!
//! fn load_settings() -> VasariResult<String> {
//!     Err(ConfigError::new("DATABASE_POOL_SIZE is not a number"))?
//! }
//!
//! match load_settings() {
//!     Ok(url) => println!("Got: {}", url),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod gallery;

pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use gallery::{GalleryError, GalleryErrorKind, GalleryResult};
