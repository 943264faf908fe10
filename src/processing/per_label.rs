//! GLCM features for every labeled object of an image

use crate::error::Result;
use crate::processing::comatrix::{CooccurrenceBuilder, GreyComatrix};
use crate::processing::masked::masked_glcm_with;
use crate::processing::props::{HaralickFormulas, PropertyFormulas, reduce_properties_with};
use crate::processing::regions::{BoundingBoxRegions, RegionEnumerator};
use crate::types::{GlcmParams, PropertyTable, Region};
use crate::utils::feature_names::glcm_feature_names;
use crate::utils::parallel::try_map_ordered;
use log::{debug, trace, warn};
use ndarray::{Array2, ArrayView2};

/// Per-region GLCM extraction with pluggable collaborators.
///
/// Regions come from `R`, co-occurrences from `B` and property values from `F`.
/// Regions are processed independently (in parallel with the `parallel`
/// feature) and written into a table pre-sized to one row per region, so the
/// row order is always ascending by label.
///
/// Extraction is fail-fast: the first region that errors aborts the call and
/// no partial table is returned.
#[derive(Debug, Clone)]
pub struct GlcmFeatureExtractor<R = BoundingBoxRegions, B = GreyComatrix, F = HaralickFormulas> {
    params: GlcmParams,
    regions: R,
    builder: B,
    formulas: F,
}

impl GlcmFeatureExtractor {
    pub fn new(params: GlcmParams) -> Self {
        let builder = GreyComatrix::builder().symmetric(params.symmetric).build();
        Self {
            params,
            regions: BoundingBoxRegions,
            builder,
            formulas: HaralickFormulas,
        }
    }
}

impl Default for GlcmFeatureExtractor {
    fn default() -> Self {
        Self::new(GlcmParams::default())
    }
}

impl<R, B, F> GlcmFeatureExtractor<R, B, F>
where
    R: RegionEnumerator,
    B: CooccurrenceBuilder,
    F: PropertyFormulas,
{
    pub fn with_region_enumerator<R2: RegionEnumerator>(self, regions: R2) -> GlcmFeatureExtractor<R2, B, F> {
        GlcmFeatureExtractor {
            params: self.params,
            regions,
            builder: self.builder,
            formulas: self.formulas,
        }
    }

    pub fn with_cooccurrence_builder<B2: CooccurrenceBuilder>(self, builder: B2) -> GlcmFeatureExtractor<R, B2, F> {
        GlcmFeatureExtractor {
            params: self.params,
            regions: self.regions,
            builder,
            formulas: self.formulas,
        }
    }

    pub fn with_formulas<F2: PropertyFormulas>(self, formulas: F2) -> GlcmFeatureExtractor<R, B, F2> {
        GlcmFeatureExtractor {
            params: self.params,
            regions: self.regions,
            builder: self.builder,
            formulas,
        }
    }

    pub fn params(&self) -> &GlcmParams {
        &self.params
    }

    /// Column names of the table produced by [`Self::extract`]
    pub fn feature_names(&self) -> Vec<String> {
        glcm_feature_names(&self.params.distances, &self.params.angles, &self.params.properties)
    }

    /// Flattened features of one region, in [`Self::feature_names`] order.
    pub fn extract_region(&self, region: &Region) -> Result<Vec<f64>> {
        trace!(
            "region {}: bbox {:?}, {} pixels",
            region.label, region.bbox, region.area
        );
        let glcm = masked_glcm_with(
            &self.builder,
            region.intensity_image.view(),
            region.mask.view(),
            &self.params,
        )?;
        if glcm.total() == 0 {
            warn!(
                "region {} has no co-occurring pixel pairs; properties fall back to zero-sum values",
                region.label
            );
        }
        let features = reduce_properties_with(&self.formulas, &glcm, &self.params.properties);
        Ok(features.iter().copied().collect())
    }

    /// Features of every positive label in `labels`, one table row per label.
    pub fn extract(&self, image: ArrayView2<'_, f64>, labels: ArrayView2<'_, u32>) -> Result<PropertyTable> {
        self.params.validate()?;
        let names = self.feature_names();
        let regions = self.regions.regions(labels, image)?;
        debug!(
            "extracting {} GLCM features for {} regions (distances {:?}, angles {:?}, n_bins {})",
            names.len(),
            regions.len(),
            self.params.distances,
            self.params.angles,
            self.params.n_bins
        );

        let rows = try_map_ordered(regions, |region| {
            Ok((region.label, self.extract_region(&region)?))
        })?;

        let mut region_labels = Vec::with_capacity(rows.len());
        let mut values = Array2::zeros((rows.len(), names.len()));
        for ((label, features), mut row) in rows.into_iter().zip(values.rows_mut()) {
            region_labels.push(label);
            row.iter_mut()
                .zip(features)
                .for_each(|(slot, value)| *slot = value);
        }

        PropertyTable::new(region_labels, names, values)
    }
}

/// GLCM features for each object in `image`, keyed by its label.
///
/// `image` is a normalized intensity image (values are clamped to `[0, 1]`);
/// `labels` marks each object with a positive integer, `0` being background.
pub fn glcm_features_per_label(
    image: ArrayView2<'_, f64>,
    labels: ArrayView2<'_, u32>,
    params: &GlcmParams,
) -> Result<PropertyTable> {
    GlcmFeatureExtractor::new(params.clone()).extract(image, labels)
}
