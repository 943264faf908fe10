use ndarray::{Array4, ArrayView2, Axis, s};
use serde::{Deserialize, Serialize};

/// Co-occurrence counts indexed by `(level_i, level_j, distance, angle)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooccurrenceMatrix {
    counts: Array4<u32>,
}

impl CooccurrenceMatrix {
    pub fn new(counts: Array4<u32>) -> Self {
        Self { counts }
    }

    pub fn zeros(levels: usize, n_distances: usize, n_angles: usize) -> Self {
        Self {
            counts: Array4::zeros((levels, levels, n_distances, n_angles)),
        }
    }

    pub fn levels(&self) -> usize {
        self.counts.len_of(Axis(0))
    }

    pub fn n_distances(&self) -> usize {
        self.counts.len_of(Axis(2))
    }

    pub fn n_angles(&self) -> usize {
        self.counts.len_of(Axis(3))
    }

    pub fn counts(&self) -> &Array4<u32> {
        &self.counts
    }

    pub fn counts_mut(&mut self) -> &mut Array4<u32> {
        &mut self.counts
    }

    pub fn into_counts(self) -> Array4<u32> {
        self.counts
    }

    /// The `levels x levels` matrix for one (distance, angle) pair.
    pub fn slice(&self, distance_idx: usize, angle_idx: usize) -> ArrayView2<'_, u32> {
        self.counts.slice(s![.., .., distance_idx, angle_idx])
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn slice_total(&self, distance_idx: usize, angle_idx: usize) -> u64 {
        self.slice(distance_idx, angle_idx)
            .iter()
            .map(|&c| c as u64)
            .sum()
    }

    /// Drop level 0 on both axes, removing every pair that touches background.
    pub fn without_background(&self) -> Self {
        if self.levels() == 0 {
            return self.clone();
        }
        Self {
            counts: self.counts.slice(s![1.., 1.., .., ..]).to_owned(),
        }
    }

    /// Joint probabilities per (distance, angle) slice.
    ///
    /// A slice that sums to zero stays all-zero instead of dividing by zero.
    pub fn normalized(&self) -> Array4<f64> {
        let mut probs = self.counts.mapv(|c| c as f64);
        for mut dist in probs.axis_iter_mut(Axis(2)) {
            for mut slice in dist.axis_iter_mut(Axis(2)) {
                let sum: f64 = slice.sum();
                if sum > 0.0 {
                    slice /= sum;
                }
            }
        }
        probs
    }
}
