//! Visibility filtering for gallery queries.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which records a gallery query admits, keyed on the row's `hidden` flag.
///
/// # Examples
///
/// ```
/// use vasari_core::VisibilityFilter;
///
/// let filter: VisibilityFilter = "hidden-only".parse().unwrap();
/// assert_eq!(filter, VisibilityFilter::HiddenOnly);
/// assert_eq!(filter.hidden_states(), &[true]);
/// assert_eq!(VisibilityFilter::default(), VisibilityFilter::VisibleOnly);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VisibilityFilter {
    /// Only records with `hidden = false`.
    VisibleOnly,
    /// Only records with `hidden = true`.
    HiddenOnly,
    /// No filter on `hidden`.
    All,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::VisibleOnly
    }
}

impl VisibilityFilter {
    /// The set of `hidden` values a matching row may carry.
    ///
    /// Queries filter by set membership on the `hidden` column, so `All`
    /// admits both values rather than dropping the predicate.
    pub fn hidden_states(&self) -> &'static [bool] {
        match self {
            Self::VisibleOnly => &[false],
            Self::HiddenOnly => &[true],
            Self::All => &[false, true],
        }
    }
}
