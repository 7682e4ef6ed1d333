use itertools::{Itertools, MinMaxResult};

use crate::util::scale_from_gain;

/// Applies a gain in dB to every sample in the buffer.
///
/// Each sample is remapped as `min * scale + (sample - min) * scale`, anchored on
/// the buffer's minimum. That is the same as plain multiplication by the linear
/// gain (up to rounding); the buffer is *not* normalized to any peak, so
/// asymmetric waveforms keep their offset. Empty buffers are left untouched.
pub fn scale_to_gain(buffer: &mut [f64], gain: f64) {
    let scale = scale_from_gain(gain);
    let (min, max) = match buffer.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return,
        MinMaxResult::OneElement(sample) => (sample, sample),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    tracing::trace!(min, max, gain, scale, "scaling buffer");

    let floor = min * scale;
    for sample in buffer.iter_mut() {
        *sample = floor + (*sample - min) * scale;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            let tolerance = 1e-9 * x.abs().max(y.abs()).max(1.0);
            assert!((x - y).abs() <= tolerance, "{x} != {y}");
        }
    }

    #[test]
    fn test_scale_is_multiplication() {
        let mut buffer = vec![-0.25, 0.5, 0.75, -1.0, 0.0];
        scale_to_gain(&mut buffer, 20.0);
        assert_close(&buffer, &[-2.5, 5.0, 7.5, -10.0, 0.0]);
    }

    #[test]
    fn test_scale_keeps_offset() {
        // An all-positive buffer is not pulled towards zero or stretched to a peak.
        let mut buffer = vec![0.5, 0.6, 0.7];
        scale_to_gain(&mut buffer, 0.0);
        assert_close(&buffer, &[0.5, 0.6, 0.7]);
    }

    #[test]
    fn test_scale_edge_cases() {
        let mut empty: Vec<f64> = vec![];
        scale_to_gain(&mut empty, 40.0);
        assert!(empty.is_empty());

        let mut single = vec![0.3];
        scale_to_gain(&mut single, -20.0);
        assert_close(&single, &[0.03]);

        let mut silence = vec![0.0; 16];
        scale_to_gain(&mut silence, 83.0);
        assert!(silence.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_scale_composes() {
        let original = vec![-0.9, -0.1, 0.0, 0.2, 0.6];
        let mut twice = original.clone();
        scale_to_gain(&mut twice, 6.0);
        scale_to_gain(&mut twice, -15.0);
        let mut once = original;
        scale_to_gain(&mut once, -9.0);
        assert_close(&twice, &once);
    }
}
