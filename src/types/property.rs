//! Texture properties derivable from a co-occurrence matrix

use crate::error::GlcmError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// GLCM texture measures, in their canonical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum GlcmProperty {
    /// Local intensity variation, weighted by squared level difference
    #[strum(serialize = "contrast")]
    #[serde(rename = "contrast")]
    Contrast,
    #[strum(serialize = "dissimilarity")]
    #[serde(rename = "dissimilarity")]
    Dissimilarity,
    /// Inverse difference moment
    #[strum(serialize = "homogeneity")]
    #[serde(rename = "homogeneity")]
    Homogeneity,
    /// Square root of ASM
    #[strum(serialize = "energy")]
    #[serde(rename = "energy")]
    Energy,
    #[strum(serialize = "correlation")]
    #[serde(rename = "correlation")]
    Correlation,
    /// Angular second moment
    #[strum(serialize = "ASM")]
    #[serde(rename = "ASM")]
    Asm,
}

impl GlcmProperty {
    /// All six properties in canonical order.
    pub fn all() -> Vec<GlcmProperty> {
        GlcmProperty::iter().collect()
    }

    /// Parse a property by its canonical name (case-sensitive).
    pub fn parse(name: &str) -> Result<GlcmProperty, GlcmError> {
        name.parse()
            .map_err(|_| GlcmError::UnknownProperty(name.to_string()))
    }
}
