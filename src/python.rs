//! Python bindings, built with the `python` feature.

use crate::error::{GlcmError, Result};
use crate::types::{GlcmParams, GlcmProperty};
use crate::utils::glcm_feature_names;
use ndarray::Array2;
use pyo3::{Bound, PyResult, Python, pyfunction, pymodule, types::PyModule, types::PyModuleMethods, wrap_pyfunction};
use pyo3_polars::PyDataFrame;

fn to_array2<T: Clone>(name: &'static str, rows: Vec<Vec<T>>) -> Result<Array2<T>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(GlcmError::InvalidParameter {
            name,
            value: format!("row of length {}", row.len()),
            reason: format!("all rows must have length {}", width),
        });
    }
    let flat: Vec<T> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((height, width), flat).map_err(|e| GlcmError::InvalidParameter {
        name,
        value: format!("{}x{}", height, width),
        reason: e.to_string(),
    })
}

fn parse_properties(properties: Option<Vec<String>>) -> Result<Vec<GlcmProperty>> {
    match properties {
        Some(names) => names.iter().map(|n| GlcmProperty::parse(n)).collect(),
        None => Ok(GlcmProperty::all()),
    }
}

/// Column names for GLCM features.
///
/// Args:
///     distances (list[int]): Pixel offsets.
///     angles (list[float]): Offset angles in radians.
///     properties (list[str] | None): Property names; all six when omitted.
///
/// Returns:
///     list[str]: One `{property}_{distance}_{degrees}` name per combination.
#[pyfunction]
#[pyo3(name = "glcm_feature_names", signature = (distances, angles = vec![0.0], properties = None))]
fn py_glcm_feature_names(
    distances: Vec<usize>,
    angles: Vec<f64>,
    properties: Option<Vec<String>>,
) -> PyResult<Vec<String>> {
    let properties = parse_properties(properties)?;
    Ok(glcm_feature_names(&distances, &angles, &properties))
}

/// GLCM features for every labeled object in an image.
///
/// Args:
///     img (2D float array): Normalized intensity image; values are clamped to [0, 1].
///     labels (2D int array): Object labels, 0 for background.
///     distances (list[int]): Pixel offsets.
///     angles (list[float]): Offset angles in radians.
///     properties (list[str] | None): Property names; all six when omitted.
///     n_bins (int): Number of intensity levels.
///
/// Returns:
///     polars.DataFrame: A `label` column plus one column per feature.
///
/// Raises:
///     ValueError: On mismatched shapes, unknown properties or unsupported bin counts.
#[pyfunction]
#[pyo3(name = "glcm_features_per_label", signature = (img, labels, distances, angles = vec![0.0], properties = None, n_bins = 255))]
fn py_glcm_features_per_label(
    py: Python<'_>,
    img: Vec<Vec<f64>>,
    labels: Vec<Vec<u32>>,
    distances: Vec<usize>,
    angles: Vec<f64>,
    properties: Option<Vec<String>>,
    n_bins: usize,
) -> PyResult<PyDataFrame> {
    let image = to_array2("img", img)?;
    let labels = to_array2("labels", labels)?;
    let params = GlcmParams::builder()
        .distances(distances)
        .angles(angles)
        .properties(parse_properties(properties)?)
        .n_bins(n_bins)
        .build();

    let df = py.allow_threads(|| -> Result<_> {
        crate::glcm_features_per_label(image.view(), labels.view(), &params)?.to_dataframe()
    })?;
    Ok(PyDataFrame(df))
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_glcm_feature_names, m)?)?;
    m.add_function(wrap_pyfunction!(py_glcm_features_per_label, m)?)?;
    Ok(())
}
