//! Stratified sub-pixel offsets for anti-aliasing.

use lumen_math::DVec3;

/// Side of the square sample grid, or `None` if `samples` is not a non-zero
/// perfect square.
pub fn grid_side(samples: u32) -> Option<u32> {
    let side = (samples as f64).sqrt().round() as u32;
    (samples > 0 && side.checked_mul(side) == Some(samples)).then_some(side)
}

/// Offsets, in pixel units, of each of the `samples` sub-samples.
///
/// Sample `k` sits at `(1 - (k mod s)/s, 1 - floor(k/s)/s)` on an `s × s`
/// grid, so the offsets always cover `(0, 1]` on both axes.
///
/// # Panics
///
/// If `samples` is not a perfect square; [`crate::RenderConfig::validate`]
/// rejects such configurations before any sampling.
pub fn jitter_offsets(samples: u32) -> Vec<(f64, f64)> {
    let side = grid_side(samples).unwrap_or_else(|| panic!("{samples} samples is not a perfect square"));
    let s = side as f64;
    (0..samples)
        .map(|k| (1.0 - (k % side) as f64 / s, 1.0 - (k / side) as f64 / s))
        .collect()
}

/// Component-wise mean.
pub fn average(colors: impl ExactSizeIterator<Item = DVec3>) -> DVec3 {
    let n = colors.len();
    if n == 0 {
        return DVec3::ZERO;
    }
    colors.sum::<DVec3>() / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_side() {
        assert_eq!(grid_side(1), Some(1));
        assert_eq!(grid_side(4), Some(2));
        assert_eq!(grid_side(16), Some(4));
        assert_eq!(grid_side(0), None);
        assert_eq!(grid_side(2), None);
        assert_eq!(grid_side(15), None);
        assert_eq!(grid_side(65535 * 65535), Some(65535));
        assert_eq!(grid_side(u32::MAX), None);
    }

    #[test]
    fn test_four_sample_grid() {
        assert_eq!(
            jitter_offsets(4),
            vec![(1.0, 1.0), (0.5, 1.0), (1.0, 0.5), (0.5, 0.5)]
        );
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(jitter_offsets(1), vec![(1.0, 1.0)]);
    }

    #[test]
    fn test_offsets_are_stratified() {
        let offsets = jitter_offsets(9);
        assert_eq!(offsets.len(), 9);
        for (i, a) in offsets.iter().enumerate() {
            assert!(a.0 > 0.0 && a.0 <= 1.0 && a.1 > 0.0 && a.1 <= 1.0);
            // No two samples share a cell
            assert!(offsets[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    #[should_panic]
    fn test_non_square_panics() {
        jitter_offsets(3);
    }

    #[test]
    fn test_average() {
        let colors = vec![DVec3::new(0.0, 10.0, 255.0), DVec3::new(100.0, 20.0, 255.0)];
        assert_eq!(average(colors.into_iter()), DVec3::new(50.0, 15.0, 255.0));
        assert_eq!(average(Vec::new().into_iter()), DVec3::ZERO);
    }
}
