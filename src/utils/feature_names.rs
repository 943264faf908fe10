use crate::types::GlcmProperty;
use itertools::iproduct;

/// Column names for GLCM features, one per (property, distance, angle).
///
/// Names read `{property}_{distance}_{angle in degrees}`, e.g. `contrast_1_0.0`,
/// ordered property-major, then distance, then angle. This matches the
/// flattened order of [`crate::reduce_properties`].
pub fn glcm_feature_names(
    distances: &[usize],
    angles: &[f64],
    properties: &[GlcmProperty],
) -> Vec<String> {
    iproduct!(properties, distances, angles)
        .map(|(property, distance, angle)| {
            format!("{}_{}_{}", property, distance, float_repr(angle.to_degrees()))
        })
        .collect()
}

/// Shortest round-trip rendering of `value` with a signed, two-digit exponent.
///
/// `{:?}` already switches to scientific notation below `1e-4` and from `1e16`,
/// but writes `1e-6`/`1e16` where Python writes `1e-06`/`1e+16`.
fn float_repr(value: f64) -> String {
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}
