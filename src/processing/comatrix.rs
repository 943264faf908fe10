//! Co-occurrence matrix construction

use crate::types::{CooccurrenceMatrix, QuantLevel, QuantizedImage};
use crate::utils::misc::pixel_offset;
use bon::Builder;
use ndarray::{ArrayView2, s};

/// Builds a co-occurrence matrix from an image of integer gray levels.
pub trait CooccurrenceBuilder: Send + Sync {
    /// Count level pairs at each `(distance, angle)` offset.
    ///
    /// The result has shape `(levels, levels, distances.len(), angles.len())`;
    /// pixels whose level is `>= levels` are not counted.
    fn build<T: QuantLevel>(
        &self,
        image: ArrayView2<'_, T>,
        distances: &[usize],
        angles: &[f64],
        levels: usize,
    ) -> CooccurrenceMatrix;
}

/// Direct pixel-pair counting over the whole image.
///
/// Entry `(i, j, d, a)` counts reference pixels at level `i` whose neighbour,
/// `distances[d]` pixels away along `angles[a]`, sits at level `j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct GreyComatrix {
    /// Also count every pair in the reverse direction
    #[builder(default)]
    pub symmetric: bool,
}

impl CooccurrenceBuilder for GreyComatrix {
    fn build<T: QuantLevel>(
        &self,
        image: ArrayView2<'_, T>,
        distances: &[usize],
        angles: &[f64],
        levels: usize,
    ) -> CooccurrenceMatrix {
        let (rows, cols) = image.dim();
        let (rows, cols) = (rows as isize, cols as isize);
        let mut glcm = CooccurrenceMatrix::zeros(levels, distances.len(), angles.len());
        let counts = glcm.counts_mut();

        for (d_idx, &distance) in distances.iter().enumerate() {
            for (a_idx, &angle) in angles.iter().enumerate() {
                let (dr, dc) = pixel_offset(distance, angle);

                for r in 0isize.max(dr.saturating_neg())..rows.min(rows.saturating_sub(dr)) {
                    for c in 0isize.max(dc.saturating_neg())..cols.min(cols.saturating_sub(dc)) {
                        let i = image[[r as usize, c as usize]].index();
                        let j = image[[(r + dr) as usize, (c + dc) as usize]].index();
                        if i < levels && j < levels {
                            counts[[i, j, d_idx, a_idx]] += 1;
                        }
                    }
                }

                if self.symmetric {
                    let mut slice = counts.slice_mut(s![.., .., d_idx, a_idx]);
                    let transposed = slice.t().to_owned();
                    slice += &transposed;
                }
            }
        }

        glcm
    }
}

/// Run `builder` on a quantized image of whichever width it was stored at.
pub fn comatrix_for<B: CooccurrenceBuilder>(
    builder: &B,
    image: &QuantizedImage,
    distances: &[usize],
    angles: &[f64],
    levels: usize,
) -> CooccurrenceMatrix {
    match image {
        QuantizedImage::U8(a) => builder.build(a.view(), distances, angles, levels),
        QuantizedImage::U16(a) => builder.build(a.view(), distances, angles, levels),
        QuantizedImage::U32(a) => builder.build(a.view(), distances, angles, levels),
        QuantizedImage::U64(a) => builder.build(a.view(), distances, angles, levels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, arr2};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn reference_image() -> Array2<u8> {
        arr2(&[[0, 0, 1, 1], [0, 0, 1, 1], [0, 2, 2, 2], [2, 2, 3, 3]])
    }

    #[test]
    fn test_canonical_angles() {
        let image = reference_image();
        let angles = [0.0, FRAC_PI_4, FRAC_PI_2, 3.0 * FRAC_PI_4];
        let glcm = GreyComatrix::default().build(image.view(), &[1], &angles, 4);

        assert_eq!(glcm.counts().dim(), (4, 4, 1, 4));
        assert_eq!(
            glcm.slice(0, 0),
            arr2(&[[2u32, 2, 1, 0], [0, 2, 0, 0], [0, 0, 3, 1], [0, 0, 0, 1]])
        );
        assert_eq!(
            glcm.slice(0, 1),
            arr2(&[[1u32, 1, 3, 0], [0, 1, 1, 0], [0, 0, 0, 2], [0, 0, 0, 0]])
        );
        assert_eq!(
            glcm.slice(0, 2),
            arr2(&[[3u32, 0, 2, 0], [0, 2, 2, 0], [0, 0, 1, 2], [0, 0, 0, 0]])
        );
        assert_eq!(
            glcm.slice(0, 3),
            arr2(&[[2u32, 0, 0, 0], [1, 1, 2, 0], [0, 0, 2, 1], [0, 0, 0, 0]])
        );
    }

    #[test]
    fn test_symmetric_adds_transpose() {
        let image = reference_image();
        let glcm = GreyComatrix::builder()
            .symmetric(true)
            .build()
            .build(image.view(), &[1], &[0.0], 4);
        assert_eq!(
            glcm.slice(0, 0),
            arr2(&[[4u32, 2, 1, 0], [2, 4, 0, 0], [1, 0, 6, 1], [0, 0, 1, 2]])
        );
        assert_eq!(glcm.total(), 24);
    }

    #[test]
    fn test_offset_larger_than_image_counts_nothing() {
        let image = reference_image();
        let glcm = GreyComatrix::default().build(image.view(), &[1, 4], &[0.0], 4);
        assert_eq!(glcm.slice_total(0, 0), 12);
        assert_eq!(glcm.slice_total(1, 0), 0);
    }

    #[test]
    fn test_saturated_offsets_count_nothing() {
        let image = reference_image();
        let angles = [-FRAC_PI_2, PI, 3.0 * FRAC_PI_4, 0.0];
        let glcm = GreyComatrix::builder()
            .symmetric(true)
            .build()
            .build(image.view(), &[usize::MAX], &angles, 4);
        assert_eq!(glcm.total(), 0);
    }

    #[test]
    fn test_levels_outside_range_are_ignored() {
        let image = arr2(&[[0u16, 1, 9]]);
        let glcm = GreyComatrix::default().build(image.view(), &[1], &[0.0], 2);
        assert_eq!(glcm.slice(0, 0), arr2(&[[0u32, 1], [0, 0]]));
    }

    #[test]
    fn test_comatrix_for_dispatches_on_width() {
        let narrow = QuantizedImage::U8(reference_image());
        let wide = QuantizedImage::U64(reference_image().mapv(u64::from));
        let builder = GreyComatrix::default();
        assert_eq!(
            comatrix_for(&builder, &narrow, &[1], &[0.0], 4),
            comatrix_for(&builder, &wide, &[1], &[0.0], 4)
        );
    }
}
