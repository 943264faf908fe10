//! Type definitions for GLCM texture extraction

pub mod comatrix;
pub mod params;
pub mod property;
pub mod property_table;
pub mod quantization;
pub mod region;

// Re-export the main types for convenience
pub use comatrix::CooccurrenceMatrix;
pub use params::{GlcmParams, MAX_DISTANCE, MAX_MATRIX_ELEMENTS};
pub use property::GlcmProperty;
pub use property_table::{PropertyTable, select_property};
pub use quantization::{QuantDtype, QuantLevel, QuantizedImage, select_quant_dtype};
pub use region::{BoundingBox, Region};
