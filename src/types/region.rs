//! Types describing one labeled object and its crop of the image

use crate::utils::misc::Coordinate;
use bon::Builder;
use ndarray::{Array2, ArrayView2, s};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a region; `max_row` and `max_col` are exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct BoundingBox {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl BoundingBox {
    /// The 1x1 box around a single pixel.
    pub fn around(coord: Coordinate) -> Self {
        Self {
            min_row: coord.y,
            min_col: coord.x,
            max_row: coord.y + 1,
            max_col: coord.x + 1,
        }
    }

    pub fn expand_to_contain(&mut self, coord: Coordinate) {
        self.min_row = self.min_row.min(coord.y);
        self.min_col = self.min_col.min(coord.x);
        self.max_row = self.max_row.max(coord.y + 1);
        self.max_col = self.max_col.max(coord.x + 1);
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col
    }

    /// Borrow the part of `array` covered by this box.
    pub fn crop<'a, T>(&self, array: ArrayView2<'a, T>) -> ArrayView2<'a, T> {
        array.slice_move(s![self.min_row..self.max_row, self.min_col..self.max_col])
    }
}

/// A labeled object: its id, bounds, and the intensity/mask pair over those bounds.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Region {
    pub label: u32,
    pub bbox: BoundingBox,
    /// Number of member pixels
    pub area: usize,
    /// Bounding-box crop of the image with non-member pixels set to 0.0
    pub intensity_image: Array2<f64>,
    /// `true` where the crop pixel belongs to this region
    pub mask: Array2<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_bbox_growth_and_crop() {
        let mut bbox = BoundingBox::around(Coordinate::builder().y(2).x(1).build());
        assert_eq!((bbox.height(), bbox.width()), (1, 1));

        bbox.expand_to_contain(Coordinate { y: 0, x: 2 });
        assert_eq!(
            bbox,
            BoundingBox::builder().min_row(0).min_col(1).max_row(3).max_col(3).build()
        );

        let image = arr2(&[[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11]]);
        assert_eq!(bbox.crop(image.view()), arr2(&[[1, 2], [5, 6], [9, 10]]));
    }
}
