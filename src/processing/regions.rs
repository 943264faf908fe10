//! Enumeration of labeled regions in a label map

use crate::error::Result;
use crate::types::{BoundingBox, Region};
use crate::utils::misc::{Coordinate, ensure_same_shape};
use ndarray::{ArrayView2, Zip};
use std::collections::BTreeMap;

/// Yields every labeled object of an image as a cropped intensity/mask pair.
pub trait RegionEnumerator: Send + Sync {
    /// Regions for every positive label in `labels`, in ascending label order.
    fn regions(&self, labels: ArrayView2<'_, u32>, image: ArrayView2<'_, f64>) -> Result<Vec<Region>>;
}

/// Crops each label to its bounding box in a single pass over the label map.
///
/// Label `0` is background and never becomes a region. A label may cover
/// several disconnected patches; they are treated as one region.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxRegions;

impl RegionEnumerator for BoundingBoxRegions {
    fn regions(&self, labels: ArrayView2<'_, u32>, image: ArrayView2<'_, f64>) -> Result<Vec<Region>> {
        ensure_same_shape(image.dim(), labels.dim())?;

        let regions = region_bounds(labels)
            .into_iter()
            .map(|(label, (bbox, area))| {
                let mask = bbox.crop(labels).mapv(|l| l == label);
                let intensity_image = Zip::from(bbox.crop(image))
                    .and(&mask)
                    .map_collect(|&v, &inside| if inside { v } else { 0.0 });

                Region::builder()
                    .label(label)
                    .bbox(bbox)
                    .area(area)
                    .intensity_image(intensity_image)
                    .mask(mask)
                    .build()
            })
            .collect();

        Ok(regions)
    }
}

/// Bounding box and pixel count of every positive label, keyed by label.
pub fn region_bounds(labels: ArrayView2<'_, u32>) -> BTreeMap<u32, (BoundingBox, usize)> {
    let mut bounds: BTreeMap<u32, (BoundingBox, usize)> = BTreeMap::new();
    for ((y, x), &label) in labels.indexed_iter() {
        if label == 0 {
            continue;
        }
        let coord = Coordinate { y, x };
        bounds
            .entry(label)
            .and_modify(|(bbox, area)| {
                bbox.expand_to_contain(coord);
                *area += 1;
            })
            .or_insert((BoundingBox::around(coord), 1));
    }
    bounds
}
