//! GLCM pipeline: quantize and mask a region, count co-occurrences, reduce
//! them to texture properties, and aggregate over every labeled region.

pub mod comatrix;
pub mod masked;
pub mod per_label;
pub mod props;
pub mod regions;

// Re-export for easier access
pub use comatrix::{CooccurrenceBuilder, GreyComatrix, comatrix_for};
pub use masked::{
    glcm_features_masked, glcm_features_masked_with, masked_glcm, masked_glcm_with,
    quantize_and_mask,
};
pub use per_label::{GlcmFeatureExtractor, glcm_features_per_label};
pub use props::{HaralickFormulas, PropertyFormulas, reduce_properties, reduce_properties_with};
pub use regions::{BoundingBoxRegions, RegionEnumerator, region_bounds};
