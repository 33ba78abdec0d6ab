//! Min-max amplitude normalization
//!
//! Rescales a window into [0, 1]. A constant window (silence, or a
//! fully zero-padded one) has no range to rescale; the policy is to
//! emit zeros rather than let the division produce NaN.

/// Rescale each value `v` to `(v - min) / (max - min)`
///
/// A degenerate window (max == min) maps to all zeros. The output is
/// always finite.
pub fn normalize(window: &[f32]) -> Vec<f32> {
    let min = window.iter().copied().fold(f32::INFINITY, f32::min);
    let max = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    if !(range > 0.0) || !range.is_finite() {
        return vec![0.0; window.len()];
    }

    window.iter().map(|&v| (v - min) / range).collect()
}
