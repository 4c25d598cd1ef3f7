//! Precision policy for derived columns.
//!
//! Every derived metric is rounded to [`PRECISION_DECIMALS`] places and then
//! stored as `f32`, so two runs over the same quotes are bit-identical.

use ndarray::{Array1, ArrayView1, Zip};

/// Decimal places kept before narrowing to `f32`.
pub const PRECISION_DECIMALS: u32 = 5;

/// Rounds `value` to `decimals` places, half-to-even on the scaled value.
///
/// Non-finite inputs are returned unchanged, as are values whose scaled form
/// overflows.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Rounds a single value to [`PRECISION_DECIMALS`] places and narrows it.
#[inline]
pub fn coerce_f32(value: f64) -> f32 {
    round_to(value, PRECISION_DECIMALS) as f32
}

/// Coerces a column to the canonical `f32` representation.
///
/// ```rust
/// use emporium_core::precision::fc32;
///
/// let values = vec![1.234567, 2.345678];
/// let out = fc32(values.as_slice());
/// assert_eq!(out[0], 1.23457f32);
/// assert_eq!(out[1], 2.34568f32);
/// ```
pub fn fc32<'a, V>(values: V) -> Array1<f32>
where
    V: Into<ArrayView1<'a, f64>>,
{
    values.into().mapv(coerce_f32)
}

/// Divides, returning NaN when the denominator is exactly zero.
#[inline]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Elementwise [`safe_ratio`] over two equal-length columns.
///
/// # Panics
///
/// Panics if the lengths differ. Columns of one table always agree.
pub fn ratio(numerator: &Array1<f64>, denominator: &Array1<f64>) -> Array1<f64> {
    Zip::from(numerator)
        .and(denominator)
        .map_collect(|&n, &d| safe_ratio(n, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_fc32_rounds_then_narrows() {
        let input = array![1.234567, 2.345678, 3.456789];
        let out = fc32(&input);
        let expected = [1.23457f32, 2.34568, 3.45679];
        for (got, want) in out.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-5);
        }
        assert_eq!(out[0], 1.23457f32);
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(coerce_f32(f64::NAN).is_nan());
        assert_eq!(coerce_f32(f64::INFINITY), f32::INFINITY);
        assert_eq!(round_to(f64::MAX, 5), f64::MAX);
    }

    #[test]
    fn test_fc32_empty() {
        let empty: Vec<f64> = Vec::new();
        assert!(fc32(empty.as_slice()).is_empty());
    }

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(10.0, 50.0), 0.2);
        assert!(safe_ratio(10.0, 0.0).is_nan());
        assert!(safe_ratio(0.0, 0.0).is_nan());
        assert!(safe_ratio(1.0, -0.0).is_nan());
    }

    #[test]
    fn test_ratio_columns() {
        let out = ratio(&array![1.0, 2.0, 3.0], &array![2.0, 0.0, 3.0]);
        assert_relative_eq!(out[0], 0.5);
        assert!(out[1].is_nan());
        assert_relative_eq!(out[2], 1.0);
    }
}
