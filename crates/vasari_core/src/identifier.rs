//! Identifier sets for the deployed models and schedulers.
//!
//! Gallery rows only ever reference a fixed set of deployed models and
//! schedulers. The wire form of each identifier is its id in the `model`
//! or `scheduler` lookup table; a row pointing anywhere else is a
//! data-integrity failure surfaced by the database layer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifiers of the models available in the gallery.
///
/// # Examples
///
/// ```
/// use vasari_core::ModelId;
///
/// let id: ModelId = "048b4aa3-5586-47ed-900f-f4341c96bdb2".parse().unwrap();
/// assert_eq!(id, ModelId::StableDiffusionV15);
/// assert_eq!(id.to_string(), "048b4aa3-5586-47ed-900f-f4341c96bdb2");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum ModelId {
    /// Stable Diffusion v1.5
    #[strum(serialize = "048b4aa3-5586-47ed-900f-f4341c96bdb2")]
    #[serde(rename = "048b4aa3-5586-47ed-900f-f4341c96bdb2")]
    StableDiffusionV15,
    /// Openjourney
    #[strum(serialize = "8acfe4c8-751c-4e32-a503-9cde277db48b")]
    #[serde(rename = "8acfe4c8-751c-4e32-a503-9cde277db48b")]
    Openjourney,
    /// Arcane Diffusion
    #[strum(serialize = "36d9d835-646f-4fc7-b9fe-98654464bf8e")]
    #[serde(rename = "36d9d835-646f-4fc7-b9fe-98654464bf8e")]
    ArcaneDiffusion,
    /// Ghibli Diffusion
    #[strum(serialize = "48a7031d-43b6-4a23-9f8c-8020eb6862e4")]
    #[serde(rename = "48a7031d-43b6-4a23-9f8c-8020eb6862e4")]
    GhibliDiffusion,
    /// Mo-Di Diffusion
    #[strum(serialize = "790c80e1-65b1-4556-9332-196344d4e684")]
    #[serde(rename = "790c80e1-65b1-4556-9332-196344d4e684")]
    MoDiDiffusion,
    /// Waifu Diffusion
    #[strum(serialize = "b6c1372f-31a7-457c-907c-d1b1f898a4d1")]
    #[serde(rename = "b6c1372f-31a7-457c-907c-d1b1f898a4d1")]
    WaifuDiffusion,
    /// Redshift Diffusion
    #[strum(serialize = "eaa438e1-dbf9-48fd-be71-206f0f257617")]
    #[serde(rename = "eaa438e1-dbf9-48fd-be71-206f0f257617")]
    RedshiftDiffusion,
}

/// Identifiers of the schedulers available in the gallery.
///
/// # Examples
///
/// ```
/// use vasari_core::SchedulerId;
///
/// let id: SchedulerId = "b7224e56-1440-43b9-ac86-66d66f9e8c91".parse().unwrap();
/// assert_eq!(id, SchedulerId::Lms);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum SchedulerId {
    /// K-LMS
    #[strum(serialize = "b7224e56-1440-43b9-ac86-66d66f9e8c91")]
    #[serde(rename = "b7224e56-1440-43b9-ac86-66d66f9e8c91")]
    Lms,
    /// Euler
    #[strum(serialize = "af2679a4-dbbb-4950-8c06-c3bb15416ef6")]
    #[serde(rename = "af2679a4-dbbb-4950-8c06-c3bb15416ef6")]
    Euler,
    /// Euler ancestral
    #[strum(serialize = "9d175114-58dc-4f59-8558-1573792286e9")]
    #[serde(rename = "9d175114-58dc-4f59-8558-1573792286e9")]
    EulerAncestral,
    /// Heun
    #[strum(serialize = "ab3acd3a-41ab-4d69-9eb2-10cbf9b64df7")]
    #[serde(rename = "ab3acd3a-41ab-4d69-9eb2-10cbf9b64df7")]
    Heun,
}
