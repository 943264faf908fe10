//! Quantization and masked co-occurrence for a single region
//!
//! Region pixels are quantized into `n_bins` levels and shifted up by one so
//! that level `0` only ever marks pixels outside the region. The co-occurrence
//! matrix is built over `n_bins + 1` levels and row/column `0` are dropped,
//! which removes every pair that touches a non-member pixel.

use crate::error::{GlcmError, Result};
use crate::processing::comatrix::{CooccurrenceBuilder, GreyComatrix, comatrix_for};
use crate::processing::props::{HaralickFormulas, PropertyFormulas, reduce_properties_with};
use crate::types::{CooccurrenceMatrix, GlcmParams, QuantDtype, QuantLevel, QuantizedImage};
use crate::types::quantization::select_quant_dtype;
use crate::utils::misc::ensure_same_shape;
use ndarray::{Array2, Array3, ArrayView2, Zip};
use num_traits::NumCast;

/// Clamp to `[0, 1]`, scale by `n_bins - 1` and truncate to `T`.
///
/// NaN pixels quantize to level 0.
pub fn quantize<T: QuantLevel>(image: ArrayView2<'_, f64>, n_bins: usize) -> Array2<T> {
    let scale = n_bins.saturating_sub(1) as f64;
    image.mapv(|v| <T as NumCast>::from(v.clamp(0.0, 1.0) * scale).unwrap_or_else(T::zero))
}

/// Zero every pixel outside `mask` and shift every pixel inside it up by one.
pub fn shift_for_mask<T: QuantLevel>(mut levels: Array2<T>, mask: ArrayView2<'_, bool>) -> Array2<T> {
    Zip::from(&mut levels).and(&mask).for_each(|level, &inside| {
        *level = if inside { *level + T::one() } else { T::zero() };
    });
    levels
}

/// Quantize `image` at the narrowest width for `n_bins` and reserve code 0 for
/// pixels outside `mask`.
pub fn quantize_and_mask(
    image: ArrayView2<'_, f64>,
    mask: ArrayView2<'_, bool>,
    n_bins: usize,
) -> Result<QuantizedImage> {
    ensure_same_shape(image.dim(), mask.dim())?;
    let quantized = match select_quant_dtype(n_bins as u128)? {
        QuantDtype::U8 => QuantizedImage::U8(shift_for_mask(quantize(image, n_bins), mask)),
        QuantDtype::U16 => QuantizedImage::U16(shift_for_mask(quantize(image, n_bins), mask)),
        QuantDtype::U32 => QuantizedImage::U32(shift_for_mask(quantize(image, n_bins), mask)),
        QuantDtype::U64 => QuantizedImage::U64(shift_for_mask(quantize(image, n_bins), mask)),
    };
    Ok(quantized)
}

/// Masked co-occurrence matrix using a caller-supplied builder.
///
/// Returns an `n_bins x n_bins x distances x angles` matrix in which only
/// pairs with both pixels inside `mask` are counted.
pub fn masked_glcm_with<B: CooccurrenceBuilder>(
    builder: &B,
    image: ArrayView2<'_, f64>,
    mask: ArrayView2<'_, bool>,
    params: &GlcmParams,
) -> Result<CooccurrenceMatrix> {
    params.validate()?;
    let levels = params
        .n_bins
        .checked_add(1)
        .ok_or_else(|| GlcmError::UnsupportedBinCount {
            n_bins: params.n_bins as u128,
        })?;

    let quantized = quantize_and_mask(image, mask, params.n_bins)?;
    let glcm = comatrix_for(builder, &quantized, &params.distances, &params.angles, levels);

    Ok(glcm.without_background())
}

/// Masked co-occurrence matrix with direct pixel-pair counting.
pub fn masked_glcm(
    image: ArrayView2<'_, f64>,
    mask: ArrayView2<'_, bool>,
    params: &GlcmParams,
) -> Result<CooccurrenceMatrix> {
    let builder = GreyComatrix::builder().symmetric(params.symmetric).build();
    masked_glcm_with(&builder, image, mask, params)
}

/// GLCM properties of the masked region, shaped `(properties, distances, angles)`.
pub fn glcm_features_masked_with<B: CooccurrenceBuilder, F: PropertyFormulas>(
    builder: &B,
    formulas: &F,
    image: ArrayView2<'_, f64>,
    mask: ArrayView2<'_, bool>,
    params: &GlcmParams,
) -> Result<Array3<f64>> {
    let glcm = masked_glcm_with(builder, image, mask, params)?;
    Ok(reduce_properties_with(formulas, &glcm, &params.properties))
}

/// GLCM properties of the masked region, shaped `(properties, distances, angles)`.
pub fn glcm_features_masked(
    image: ArrayView2<'_, f64>,
    mask: ArrayView2<'_, bool>,
    params: &GlcmParams,
) -> Result<Array3<f64>> {
    let builder = GreyComatrix::builder().symmetric(params.symmetric).build();
    glcm_features_masked_with(&builder, &HaralickFormulas, image, mask, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GlcmProperty;
    use approx::assert_relative_eq;
    use ndarray::{Array2, arr2};

    #[test]
    fn test_quantize_clamps_and_truncates() {
        let image = arr2(&[[-0.5, 0.0, 0.5], [0.99, 1.0, 2.0]]);
        let levels: Array2<u8> = quantize(image.view(), 5);
        assert_eq!(levels, arr2(&[[0u8, 0, 2], [3, 4, 4]]));

        let nan = arr2(&[[f64::NAN]]);
        assert_eq!(quantize::<u16>(nan.view(), 255), arr2(&[[0u16]]));
    }

    #[test]
    fn test_code_zero_iff_outside_mask() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let image = arr2(&[[0.0, 0.0], [1.0, 0.5]]);
        let mask = arr2(&[[true, false], [true, true]]);
        let quantized = quantize_and_mask(image.view(), mask.view(), 3)?;
        assert_eq!(quantized, QuantizedImage::U8(arr2(&[[1, 0], [3, 2]])));
        assert_eq!(quantized.dim(), (2, 2));
        Ok(())
    }

    #[test]
    fn test_wide_bins_use_wider_storage() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let image = arr2(&[[1.0, 0.0]]);
        let mask = arr2(&[[true, true]]);
        let quantized = quantize_and_mask(image.view(), mask.view(), 300)?;
        assert_eq!(quantized.dtype(), QuantDtype::U16);
        assert_eq!(quantized.to_u64(), arr2(&[[300u64, 1]]));
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() {
        let image = Array2::<f64>::zeros((2, 3));
        let mask = Array2::from_elem((3, 2), true);
        assert!(matches!(
            quantize_and_mask(image.view(), mask.view(), 8),
            Err(GlcmError::ShapeMismatch { expected: (2, 3), actual: (3, 2) })
        ));
    }

    #[test]
    fn test_single_pixel_region_has_no_pairs() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let image = Array2::from_elem((3, 3), 0.5);
        let mut mask = Array2::from_elem((3, 3), false);
        mask[[1, 1]] = true;
        let params = GlcmParams::builder().n_bins(8).build();

        let masked = masked_glcm(image.view(), mask.view(), &params)?;
        assert_eq!(masked.levels(), 8);
        assert_eq!(masked.total(), 0);

        let everything = Array2::from_elem((3, 3), true);
        let unmasked = masked_glcm(image.view(), everything.view(), &params)?;
        assert_eq!(unmasked.total(), 6);
        Ok(())
    }

    #[test]
    fn test_all_background_gives_zero_matrix_and_finite_props()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let image = arr2(&[[0.1, 0.9], [0.4, 0.6]]);
        let mask = Array2::from_elem((2, 2), false);
        let params = GlcmParams::builder().distances(vec![1, 2]).build();

        let glcm = masked_glcm(image.view(), mask.view(), &params)?;
        assert_eq!(glcm.counts().dim(), (255, 255, 2, 1));
        assert_eq!(glcm.total(), 0);

        let feats = glcm_features_masked(image.view(), mask.view(), &params)?;
        assert_eq!(feats.dim(), (6, 2, 1));
        assert!(feats.iter().all(|v| v.is_finite()));
        Ok(())
    }

    #[test]
    fn test_checkerboard_region() -> std::result::Result<(), Box<dyn std::error::Error>> {
        // Only the top-left 2x2 block belongs to the region.
        let image = arr2(&[[0.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]]);
        let mask = arr2(&[[true, true, false], [true, true, false], [false, false, false]]);
        let params = GlcmParams::builder().n_bins(2).build();

        let glcm = masked_glcm(image.view(), mask.view(), &params)?;
        assert_eq!(glcm.slice(0, 0), arr2(&[[0u32, 1], [1, 0]]));

        let feats = glcm_features_masked(image.view(), mask.view(), &params)?;
        let order = GlcmProperty::all();
        let value = |p: GlcmProperty| feats[[order.iter().position(|&q| q == p).unwrap(), 0, 0]];
        assert_relative_eq!(value(GlcmProperty::Contrast), 1.0);
        assert_relative_eq!(value(GlcmProperty::Dissimilarity), 1.0);
        assert_relative_eq!(value(GlcmProperty::Homogeneity), 0.5);
        assert_relative_eq!(value(GlcmProperty::Asm), 0.5);
        assert_relative_eq!(value(GlcmProperty::Energy), 0.5f64.sqrt());
        assert_relative_eq!(value(GlcmProperty::Correlation), -1.0);
        Ok(())
    }

    #[test]
    fn test_repeated_calls_are_identical() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let image = arr2(&[[0.2, 0.4, 0.6], [0.8, 1.0, 0.0], [0.3, 0.3, 0.9]]);
        let mask = arr2(&[[true, true, false], [true, true, true], [false, true, true]]);
        let params = GlcmParams::builder().distances(vec![1, 2]).n_bins(16).build();
        let first = glcm_features_masked(image.view(), mask.view(), &params)?;
        let second = glcm_features_masked(image.view(), mask.view(), &params)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let image = Array2::<f64>::zeros((2, 2));
        let mask = Array2::from_elem((2, 2), true);
        let params = GlcmParams::builder().distances(vec![]).build();
        assert!(matches!(
            masked_glcm(image.view(), mask.view(), &params),
            Err(GlcmError::InvalidParameter { name: "distances", .. })
        ));
    }

    #[test]
    fn test_oversized_bin_count_is_an_error() {
        let image = arr2(&[[0.25, 0.75]]);
        let mask = Array2::from_elem((1, 2), true);
        for n_bins in [1usize << 32, usize::MAX] {
            let params = GlcmParams::builder().n_bins(n_bins).build();
            assert!(matches!(
                masked_glcm(image.view(), mask.view(), &params),
                Err(GlcmError::InvalidParameter { name: "n_bins", .. })
            ));
            assert!(glcm_features_masked(image.view(), mask.view(), &params).is_err());
        }
    }
}
