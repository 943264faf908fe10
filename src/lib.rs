//! Per-object GLCM texture features.
//!
//! Each labeled region of an intensity image is quantized, masked so that only
//! pixel pairs inside the region are counted, and reduced to Haralick texture
//! properties (contrast, dissimilarity, homogeneity, energy, correlation, ASM).

pub mod error;
pub mod processing;
#[cfg(feature = "python")]
pub mod python;
pub mod types;
pub mod utils;

pub use error::{GlcmError, Result};
pub use processing::{
    BoundingBoxRegions, CooccurrenceBuilder, GlcmFeatureExtractor, GreyComatrix, HaralickFormulas,
    PropertyFormulas, RegionEnumerator, glcm_features_masked, glcm_features_per_label,
    masked_glcm, quantize_and_mask, reduce_properties,
};
pub use types::{
    BoundingBox, CooccurrenceMatrix, GlcmParams, GlcmProperty, PropertyTable, QuantDtype,
    QuantizedImage, Region, select_quant_dtype,
};
pub use utils::glcm_feature_names;
