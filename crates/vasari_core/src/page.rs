//! Paginated gallery response shape.

use crate::GenerationRecord;
use serde::{Deserialize, Serialize};

/// One page of gallery results.
///
/// `next` carries the following page number when a record exists one batch
/// past this page, and is `None` (serialized as `null`) on the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPage {
    /// Records in this page, newest first
    pub generations: Vec<GenerationRecord>,
    /// The 1-indexed page number that was served
    pub page: u32,
    /// The next page number, when a further page exists
    pub next: Option<u32>,
}
