//! Utility functions shared by the GLCM pipeline

pub mod feature_names;
pub mod parallel;
pub mod misc;

// Re-export commonly used utility functions for convenience
pub use feature_names::glcm_feature_names;
pub use misc::*;
