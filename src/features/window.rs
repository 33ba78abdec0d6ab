//! Fixed-length windowing
//!
//! Selects or right-pads a sample sequence to an exact length. This is
//! length fitting, not spectral windowing.

/// Fit `samples` to exactly `len` elements
///
/// Takes the first `len` samples when enough are available; otherwise
/// keeps everything and appends zeros at the end. Never fails: empty
/// input yields an all-zero window.
pub fn window(samples: &[f32], len: usize) -> Vec<f32> {
    let keep = samples.len().min(len);
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&samples[..keep]);
    out.resize(len, 0.0);
    out
}
