//! Sample-rate conversion
//!
//! In-process linear interpolation. Deterministic: the same input
//! always produces the same output.

use crate::error::{FeatureError, Result};

/// Resample a mono sample sequence from `source_rate` to `target_rate`
///
/// Output length is `len * target_rate / source_rate`, rounded to the
/// nearest sample, preserving duration. Equal rates return the input
/// unchanged without going through the interpolation path.
pub fn resample(input: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    if source_rate == 0 || target_rate == 0 {
        return Err(FeatureError::InvalidRate {
            source_rate,
            target_rate,
        });
    }
    if source_rate == target_rate {
        return Ok(input.to_vec());
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let ratio = source_rate as f64 / target_rate as f64;
    let output_len = (input.len() as f64 / ratio).round() as usize;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let pos = i as f64 * ratio;
        let idx = pos.floor() as usize;
        let frac = pos - idx as f64;

        let sample = if idx + 1 < input.len() {
            input[idx] as f64 * (1.0 - frac) + input[idx + 1] as f64 * frac
        } else {
            // Rounding can land the last output position past the final
            // input sample; hold the edge value.
            input[input.len() - 1] as f64
        };
        output.push(sample as f32);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_when_rates_match() {
        let input = vec![0.1, -0.2, 0.3, -0.4];
        let output = resample(&input, 8000, 8000).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_downsample_length() {
        let input = vec![0.0; 16000]; // 2 seconds at 8 kHz
        let output = resample(&input, 8000, 1000).unwrap();
        assert_eq!(output.len(), 2000); // 2 seconds at 1 kHz
    }

    #[test]
    fn test_upsample_length() {
        let input = vec![0.0; 500];
        let output = resample(&input, 1000, 4000).unwrap();
        assert_eq!(output.len(), 2000);
    }

    #[test]
    fn test_non_integer_ratio_length() {
        let input = vec![0.0; 44100]; // 1 second at 44.1 kHz
        let output = resample(&input, 44100, 1000).unwrap();
        assert_eq!(output.len(), 1000);
    }

    #[test]
    fn test_downsample_interpolates_between_neighbors() {
        // Halving the rate picks every other position exactly
        let input = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let output = resample(&input, 2000, 1000).unwrap();
        assert_eq!(output.len(), 3);
        assert_relative_eq!(output[0], 0.0);
        assert_relative_eq!(output[1], 2.0);
        assert_relative_eq!(output[2], 4.0);
    }

    #[test]
    fn test_upsample_midpoints() {
        let input = vec![0.0, 1.0];
        let output = resample(&input, 1000, 2000).unwrap();
        assert_eq!(output.len(), 4);
        assert_relative_eq!(output[0], 0.0);
        assert_relative_eq!(output[1], 0.5);
        assert_relative_eq!(output[2], 1.0);
        // Past the final input sample, the edge value is held
        assert_relative_eq!(output[3], 1.0);
    }

    #[test]
    fn test_deterministic() {
        let input: Vec<f32> = (0..1000).map(|i| ((i * 7) % 13) as f32 / 13.0).collect();
        let a = resample(&input, 8000, 1000).unwrap();
        let b = resample(&input, 8000, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input() {
        let output = resample(&[], 8000, 1000).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_zero_source_rate_rejected() {
        let result = resample(&[0.0], 0, 1000);
        assert!(matches!(
            result,
            Err(FeatureError::InvalidRate {
                source_rate: 0,
                target_rate: 1000,
            })
        ));
    }

    #[test]
    fn test_zero_target_rate_rejected() {
        let result = resample(&[0.0], 8000, 0);
        assert!(matches!(result, Err(FeatureError::InvalidRate { .. })));
    }
}
