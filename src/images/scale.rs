//! Dynamic-range normalization.

/// Rescale samples linearly to `[0, 1]`.
///
/// The minimum maps to 0 and the maximum to 1. A constant input (zero dynamic
/// range) yields all zeros rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use figdeck::images::scale_image;
/// assert_eq!(scale_image(&[2u8, 4, 6]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(scale_image(&[9u16, 9]), vec![0.0, 0.0]);
/// ```
pub fn scale_image<T: Copy + Into<f64>>(samples: &[T]) -> Vec<f64> {
    let (min, max) = samples
        .iter()
        .map(|&s| -> f64 { s.into() })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if range > 0.0 {
        samples
            .iter()
            .map(|&s| (Into::<f64>::into(s) - min) / range)
            .collect()
    } else {
        vec![0.0; samples.len()]
    }
}

/// Map normalized values to 8 bits: multiply by 255 and truncate.
pub(crate) fn to_u8_levels(normalized: &[f64]) -> Vec<u8> {
    normalized.iter().map(|&v| (v * 255.0) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert!(scale_image::<f32>(&[]).is_empty());
    }

    #[test]
    fn test_constant_input_is_zero() {
        assert_eq!(scale_image(&[3.5f32; 4]), vec![0.0; 4]);
    }

    #[test]
    fn test_negative_floats() {
        assert_eq!(scale_image(&[-1.0f32, 0.0, 1.0]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_u8_levels_truncate() {
        assert_eq!(to_u8_levels(&[0.0, 0.5, 1.0]), vec![0, 127, 255]);
    }

    proptest! {
        #[test]
        fn scaled_values_stay_in_unit_interval(samples in prop::collection::vec(any::<u16>(), 1..256)) {
            let scaled = scale_image(&samples);
            prop_assert_eq!(scaled.len(), samples.len());
            prop_assert!(scaled.iter().all(|v| (0.0..=1.0).contains(v)));
        }

        #[test]
        fn extremes_map_to_zero_and_one(samples in prop::collection::vec(-1.0e6f32..1.0e6, 2..128)) {
            let scaled = scale_image(&samples);
            let lo = samples.iter().copied().fold(f32::INFINITY, f32::min);
            let hi = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            prop_assume!(hi > lo);
            for (s, v) in samples.iter().zip(&scaled) {
                if *s == lo {
                    prop_assert_eq!(*v, 0.0);
                }
                if *s == hi {
                    prop_assert_eq!(*v, 1.0);
                }
            }
        }

        #[test]
        fn scaling_preserves_order(samples in prop::collection::vec(any::<u8>(), 1..64)) {
            let scaled = scale_image(&samples);
            for i in 0..samples.len() {
                for j in 0..samples.len() {
                    if samples[i] < samples[j] {
                        prop_assert!(scaled[i] < scaled[j]);
                    }
                }
            }
        }
    }
}
