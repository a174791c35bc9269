//! Shared statistics helpers
//!
//! Four analyzers quantify consistency through the coefficient of variation
//! of a sample set; the helpers live here so the thresholds in each analyzer
//! stay the only thing that differs.

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns 0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Coefficient of variation as a percentage: stdDev / mean * 100.
///
/// Returns 0 when the mean is 0 (an all-zero or empty sample set has no
/// meaningful relative spread).
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m == 0.0 {
        return 0.0;
    }
    std_dev(values) / m * 100.0
}
