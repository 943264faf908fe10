//! Unsigned integer widths used to hold quantized intensity levels

use crate::error::{GlcmError, Result};
use ndarray::Array2;
use num_traits::{NumCast, PrimInt, Unsigned};
use std::fmt::Debug;
use strum::Display;

/// The closed set of unsigned widths a quantized image can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuantDtype {
    U8,
    U16,
    U32,
    U64,
}

impl QuantDtype {
    pub fn bits(self) -> u32 {
        match self {
            QuantDtype::U8 => 8,
            QuantDtype::U16 => 16,
            QuantDtype::U32 => 32,
            QuantDtype::U64 => 64,
        }
    }
}

/// Pick the narrowest unsigned width for `n_bins` intensity bins.
///
/// A width `w` is chosen when `log2(n_bins) < w`, i.e. `n_bins < 2^w`, so
/// `255` still fits in `u8` while `256` moves up to `u16`. Anything at or
/// above `2^64` is rejected.
pub fn select_quant_dtype(n_bins: u128) -> Result<QuantDtype> {
    if n_bins <= u8::MAX as u128 {
        Ok(QuantDtype::U8)
    } else if n_bins <= u16::MAX as u128 {
        Ok(QuantDtype::U16)
    } else if n_bins <= u32::MAX as u128 {
        Ok(QuantDtype::U32)
    } else if n_bins <= u64::MAX as u128 {
        Ok(QuantDtype::U64)
    } else {
        Err(GlcmError::UnsupportedBinCount { n_bins })
    }
}

/// An unsigned integer type that can hold quantized gray levels.
pub trait QuantLevel: PrimInt + Unsigned + NumCast + Debug + Send + Sync + 'static {
    const DTYPE: QuantDtype;

    /// Level as a matrix index; levels that do not fit in `usize` map to `usize::MAX`.
    #[inline]
    fn index(self) -> usize {
        self.to_usize().unwrap_or(usize::MAX)
    }
}

impl QuantLevel for u8 {
    const DTYPE: QuantDtype = QuantDtype::U8;
}

impl QuantLevel for u16 {
    const DTYPE: QuantDtype = QuantDtype::U16;
}

impl QuantLevel for u32 {
    const DTYPE: QuantDtype = QuantDtype::U32;
}

impl QuantLevel for u64 {
    const DTYPE: QuantDtype = QuantDtype::U64;
}

/// A quantized image stored at the width picked by [`select_quant_dtype`].
///
/// Code `0` is reserved for pixels outside the region; region pixels carry
/// their quantized level shifted up by one.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizedImage {
    U8(Array2<u8>),
    U16(Array2<u16>),
    U32(Array2<u32>),
    U64(Array2<u64>),
}

impl QuantizedImage {
    pub fn dtype(&self) -> QuantDtype {
        match self {
            QuantizedImage::U8(_) => QuantDtype::U8,
            QuantizedImage::U16(_) => QuantDtype::U16,
            QuantizedImage::U32(_) => QuantDtype::U32,
            QuantizedImage::U64(_) => QuantDtype::U64,
        }
    }

    pub fn dim(&self) -> (usize, usize) {
        match self {
            QuantizedImage::U8(a) => a.dim(),
            QuantizedImage::U16(a) => a.dim(),
            QuantizedImage::U32(a) => a.dim(),
            QuantizedImage::U64(a) => a.dim(),
        }
    }

    /// Codes widened to `u64`, row-major.
    pub fn to_u64(&self) -> Array2<u64> {
        match self {
            QuantizedImage::U8(a) => a.mapv(Into::into),
            QuantizedImage::U16(a) => a.mapv(Into::into),
            QuantizedImage::U32(a) => a.mapv(Into::into),
            QuantizedImage::U64(a) => a.clone(),
        }
    }
}
