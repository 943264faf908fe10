//! Reduction of co-occurrence matrices into scalar texture properties

use crate::types::{CooccurrenceMatrix, GlcmProperty};
use ndarray::{Array3, ArrayView2, s};

/// Standard deviation below which correlation is treated as undefined.
const CORRELATION_STD_EPS: f64 = 1e-15;

/// Computes one texture property from a normalized co-occurrence slice.
pub trait PropertyFormulas: Send + Sync {
    /// `probs` is a `levels x levels` matrix of joint probabilities, summing to
    /// 1.0, or all zeros when no pairs were counted.
    fn compute(&self, probs: ArrayView2<'_, f64>, property: GlcmProperty) -> f64;
}

/// Haralick texture formulas.
///
/// An all-zero slice yields 0.0 for every property except correlation, which
/// is 1.0 whenever either marginal standard deviation vanishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaralickFormulas;

impl PropertyFormulas for HaralickFormulas {
    fn compute(&self, probs: ArrayView2<'_, f64>, property: GlcmProperty) -> f64 {
        match property {
            GlcmProperty::Contrast => weighted_sum(probs, |i, j| (i - j).powi(2)),
            GlcmProperty::Dissimilarity => weighted_sum(probs, |i, j| (i - j).abs()),
            GlcmProperty::Homogeneity => weighted_sum(probs, |i, j| 1.0 / (1.0 + (i - j).powi(2))),
            GlcmProperty::Asm => angular_second_moment(probs),
            GlcmProperty::Energy => angular_second_moment(probs).sqrt(),
            GlcmProperty::Correlation => correlation(probs),
        }
    }
}

fn weighted_sum(probs: ArrayView2<'_, f64>, weight: impl Fn(f64, f64) -> f64) -> f64 {
    probs
        .indexed_iter()
        .map(|((i, j), &p)| p * weight(i as f64, j as f64))
        .sum()
}

fn angular_second_moment(probs: ArrayView2<'_, f64>) -> f64 {
    probs.iter().map(|p| p * p).sum()
}

fn correlation(probs: ArrayView2<'_, f64>) -> f64 {
    // μ_i, μ_j
    let mut mu_i = 0.0;
    let mut mu_j = 0.0;
    for ((i, j), &p) in probs.indexed_iter() {
        mu_i += i as f64 * p;
        mu_j += j as f64 * p;
    }

    // σ_i, σ_j and the covariance
    let mut var_i = 0.0;
    let mut var_j = 0.0;
    let mut cov = 0.0;
    for ((i, j), &p) in probs.indexed_iter() {
        let di = i as f64 - mu_i;
        let dj = j as f64 - mu_j;
        var_i += di * di * p;
        var_j += dj * dj * p;
        cov += di * dj * p;
    }
    let sig_i = var_i.sqrt();
    let sig_j = var_j.sqrt();

    if sig_i < CORRELATION_STD_EPS || sig_j < CORRELATION_STD_EPS {
        return 1.0;
    }
    cov / (sig_i * sig_j)
}

/// Reduce `glcm` into `properties`, shaped `(properties, distances, angles)`.
///
/// Each (distance, angle) slice is normalized to probabilities first; the
/// output order follows `properties`, then distances, then angles.
pub fn reduce_properties_with<F: PropertyFormulas>(
    formulas: &F,
    glcm: &CooccurrenceMatrix,
    properties: &[GlcmProperty],
) -> Array3<f64> {
    let probs = glcm.normalized();
    let (n_distances, n_angles) = (glcm.n_distances(), glcm.n_angles());

    Array3::from_shape_fn((properties.len(), n_distances, n_angles), |(p, d, a)| {
        formulas.compute(probs.slice(s![.., .., d, a]), properties[p])
    })
}

/// [`reduce_properties_with`] using [`HaralickFormulas`].
pub fn reduce_properties(glcm: &CooccurrenceMatrix, properties: &[GlcmProperty]) -> Array3<f64> {
    reduce_properties_with(&HaralickFormulas, glcm, properties)
}
