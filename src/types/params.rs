//! Configuration for GLCM feature extraction

use crate::error::{GlcmError, Result};
use crate::types::property::GlcmProperty;
use bon::Builder;
use serde::{Deserialize, Serialize};

fn default_distances() -> Vec<usize> {
    vec![1]
}

fn default_angles() -> Vec<f64> {
    vec![0.0]
}

fn default_properties() -> Vec<GlcmProperty> {
    GlcmProperty::all()
}

fn default_n_bins() -> usize {
    255
}

/// Largest co-occurrence matrix, in `u32` counts, a single region may allocate (4 GiB).
pub const MAX_MATRIX_ELEMENTS: usize = 1 << 30;

/// Largest supported pixel distance; offsets must stay representable as `isize`.
pub const MAX_DISTANCE: usize = 1 << 31;

/// Parameters shared by every GLCM entry point.
///
/// Defaults are rebuilt on every call to [`GlcmParams::default`] or the builder,
/// so no two extractions share configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct GlcmParams {
    /// Pixel offsets at which co-occurrences are counted
    #[serde(default = "default_distances")]
    #[builder(default = default_distances())]
    pub distances: Vec<usize>,
    /// Offset directions in radians
    #[serde(default = "default_angles")]
    #[builder(default = default_angles())]
    pub angles: Vec<f64>,
    #[serde(default = "default_properties")]
    #[builder(default = default_properties())]
    pub properties: Vec<GlcmProperty>,
    /// Number of intensity levels region pixels are quantized into
    #[serde(default = "default_n_bins")]
    #[builder(default = default_n_bins())]
    pub n_bins: usize,
    /// Count each pair in both directions
    #[serde(default)]
    #[builder(default)]
    pub symmetric: bool,
}

impl Default for GlcmParams {
    fn default() -> Self {
        Self {
            distances: default_distances(),
            angles: default_angles(),
            properties: default_properties(),
            n_bins: default_n_bins(),
            symmetric: false,
        }
    }
}

impl GlcmParams {
    /// Load parameters from a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: GlcmParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of (property, distance, angle) combinations.
    pub fn n_features(&self) -> usize {
        self.properties.len() * self.distances.len() * self.angles.len()
    }

    /// Element count of the raw co-occurrence matrix, `(n_bins + 1)^2 x distances x angles`.
    ///
    /// `None` when the product overflows `usize`.
    pub fn matrix_len(&self) -> Option<usize> {
        let levels = self.n_bins.checked_add(1)?;
        levels
            .checked_mul(levels)?
            .checked_mul(self.distances.len())?
            .checked_mul(self.angles.len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.distances.is_empty() {
            return Err(invalid("distances", "[]", "at least one distance is required"));
        }
        if let Some(d) = self.distances.iter().find(|&&d| d == 0) {
            return Err(invalid("distances", d, "distances must be positive"));
        }
        if let Some(d) = self.distances.iter().find(|&&d| d > MAX_DISTANCE) {
            return Err(invalid("distances", d, "distance exceeds 2^31 pixels"));
        }
        if self.angles.is_empty() {
            return Err(invalid("angles", "[]", "at least one angle is required"));
        }
        if let Some(a) = self.angles.iter().find(|a| !a.is_finite()) {
            return Err(invalid("angles", a, "angles must be finite"));
        }
        if self.properties.is_empty() {
            return Err(invalid("properties", "[]", "at least one property is required"));
        }
        if self.n_bins == 0 {
            return Err(invalid("n_bins", 0, "n_bins must be >= 1"));
        }
        match self.matrix_len() {
            Some(len) if len <= MAX_MATRIX_ELEMENTS => Ok(()),
            _ => Err(invalid(
                "n_bins",
                self.n_bins,
                "co-occurrence matrix would exceed 2^30 counts",
            )),
        }
    }
}

fn invalid(name: &'static str, value: impl ToString, reason: &str) -> GlcmError {
    GlcmError::InvalidParameter {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
