use crate::error::{GlcmError, Result};
use bon::Builder;

/// Represents a 2D coordinate using row (y) and column (x).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Builder)]
pub struct Coordinate {
    pub y: usize,
    pub x: usize,
}

/// Pixel offset `(row, col)` for a co-occurrence at `distance` along `angle`.
///
/// Components are rounded to the nearest pixel, so `0` points right, `pi/2`
/// points down the rows and `pi/4` is the down-right diagonal.
pub fn pixel_offset(distance: usize, angle: f64) -> (isize, isize) {
    let d = distance as f64;
    let row = (angle.sin() * d).round() as isize;
    let col = (angle.cos() * d).round() as isize;
    (row, col)
}

/// Fail with `ShapeMismatch` unless both shapes are equal.
pub fn ensure_same_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(GlcmError::ShapeMismatch { expected, actual });
    }
    Ok(())
}
