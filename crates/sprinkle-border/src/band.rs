//! Edge-band geometry and area-weighted point sampling.
//!
//! The band is four rectangular strips hugging the container edges, in fixed
//! order: top (w x t), bottom (w x t), left (t x (h - 2t)), right
//! (t x (h - 2t)). Sampling is uniform over the band's total *area*, not over
//! the strip indices, so visual density stays even when width != height.

use sprinkle_spec::SprinkleParams;
use thiserror::Error;

use crate::rng::DeterministicRng;

/// Bound on consecutive corner keep-out rejections per sprinkle.
///
/// A generous cap: with any non-degenerate geometry the expected retry count
/// is far below 10. Exhaustion means the keep-out radius covers the whole
/// band and the configuration cannot place a sprinkle at all.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

/// Errors from band point sampling.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Every attempt landed inside a corner keep-out zone.
    #[error("corner keep-out rejected {0} consecutive band samples; geometry is degenerate")]
    RetryBudgetExhausted(u32),
}

/// A sampled position within the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Raw strip areas in fixed order: top, bottom, left, right.
///
/// Degenerate thickness can make the side strips negative; callers that use
/// these as sampling weights clamp at zero, while the count formula consumes
/// the raw sum unchanged.
pub fn strip_areas(width: f64, height: f64, thickness: f64) -> [f64; 4] {
    let horizontal = width * thickness;
    let side = (height - 2.0 * thickness) * thickness;
    [horizontal, horizontal, side, side]
}

/// Raw total band area (the unclamped sum of the four strips).
pub fn band_area(width: f64, height: f64, thickness: f64) -> f64 {
    strip_areas(width, height, thickness).iter().sum()
}

fn far_from_corners(x: f64, y: f64, width: f64, height: f64, pad: f64) -> bool {
    let corners = [(0.0, 0.0), (width, 0.0), (0.0, height), (width, height)];
    corners
        .iter()
        .all(|&(cx, cy)| (x - cx).hypot(y - cy) >= pad)
}

/// Samples one point uniformly over the band area, then jitters, clamps, and
/// enforces the corner keep-out.
///
/// Stream consumption per attempt is fixed: strip choice, in-strip x,
/// in-strip y, jitter x, jitter y. A rejected point discards all five draws
/// and starts over, up to [`MAX_SAMPLE_ATTEMPTS`] times.
pub fn sample_band_point(
    rng: &mut DeterministicRng,
    width: f64,
    height: f64,
    params: &SprinkleParams,
) -> Result<Point, SampleError> {
    let t = params.border_thickness;
    let jitter = params.jitter;

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        // Weighted strip choice; zero-area strips never win.
        let areas = strip_areas(width, height, t).map(|a| a.max(0.0));
        let total: f64 = areas.iter().sum();
        let mut remainder = rng.next_f64() * total;
        let mut strip = 0;
        for (i, area) in areas.iter().enumerate() {
            remainder -= area;
            if remainder <= 0.0 {
                strip = i;
                break;
            }
        }

        let (x, y) = match strip {
            // top
            0 => (rng.range_f64(0.0, width), rng.range_f64(0.0, t)),
            // bottom
            1 => (rng.range_f64(0.0, width), rng.range_f64(height - t, height)),
            // left
            2 => (rng.range_f64(0.0, t), rng.range_f64(t, height - t)),
            // right
            _ => (rng.range_f64(width - t, width), rng.range_f64(t, height - t)),
        };

        let x = (x + rng.range_f64(-jitter, jitter)).clamp(0.0, width);
        let y = (y + rng.range_f64(-jitter, jitter)).clamp(0.0, height);

        if far_from_corners(x, y, width, height, params.corner_clear) {
            return Ok(Point { x, y });
        }
    }

    Err(SampleError::RetryBudgetExhausted(MAX_SAMPLE_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with(thickness: f64, jitter: f64, corner_clear: f64) -> SprinkleParams {
        SprinkleParams {
            border_thickness: thickness,
            jitter,
            corner_clear,
            ..SprinkleParams::default()
        }
    }

    #[test]
    fn strip_areas_match_geometry() {
        // 400x200 with t=50: horizontals 20000 each, sides 5000 each.
        assert_eq!(
            strip_areas(400.0, 200.0, 50.0),
            [20000.0, 20000.0, 5000.0, 5000.0]
        );
        assert_eq!(band_area(400.0, 200.0, 50.0), 50000.0);
    }

    #[test]
    fn side_strips_go_negative_when_thickness_dominates() {
        let [_, _, left, right] = strip_areas(400.0, 100.0, 80.0);
        assert!(left < 0.0);
        assert!(right < 0.0);
    }

    #[test]
    fn sampled_points_stay_in_bounds() {
        let params = params_with(50.0, 8.0, 1.0);
        let mut rng = DeterministicRng::new(1);
        for _ in 0..2000 {
            let p = sample_band_point(&mut rng, 400.0, 200.0, &params).unwrap();
            assert!((0.0..=400.0).contains(&p.x));
            assert!((0.0..=200.0).contains(&p.y));
        }
    }

    #[test]
    fn zero_jitter_points_stay_in_a_strip() {
        let params = params_with(50.0, 0.0, 1.0);
        let mut rng = DeterministicRng::new(2);
        for _ in 0..2000 {
            let p = sample_band_point(&mut rng, 400.0, 200.0, &params).unwrap();
            let in_top = p.y <= 50.0;
            let in_bottom = p.y >= 150.0;
            let in_left = p.x <= 50.0 && (50.0..=150.0).contains(&p.y);
            let in_right = p.x >= 350.0 && (50.0..=150.0).contains(&p.y);
            assert!(
                in_top || in_bottom || in_left || in_right,
                "({}, {}) escaped the band",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn corner_keep_out_is_honored() {
        let params = params_with(40.0, 10.0, 25.0);
        let (w, h) = (300.0, 300.0);
        let mut rng = DeterministicRng::new(3);
        for _ in 0..2000 {
            let p = sample_band_point(&mut rng, w, h, &params).unwrap();
            for (cx, cy) in [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)] {
                assert!((p.x - cx).hypot(p.y - cy) >= 25.0);
            }
        }
    }

    #[test]
    fn swallowing_keep_out_exhausts_the_retry_budget() {
        // Keep-out radius larger than the container diagonal.
        let params = params_with(10.0, 0.0, 1000.0);
        let mut rng = DeterministicRng::new(4);
        let err = sample_band_point(&mut rng, 100.0, 100.0, &params).unwrap_err();
        assert!(matches!(
            err,
            SampleError::RetryBudgetExhausted(MAX_SAMPLE_ATTEMPTS)
        ));
    }

    #[test]
    fn zero_thickness_degenerates_to_the_top_edge() {
        // All strip weights are zero; the weighted choice falls through to
        // the first strip and samples y in [0, 0].
        let params = params_with(0.0, 0.0, 0.0);
        let mut rng = DeterministicRng::new(5);
        let p = sample_band_point(&mut rng, 200.0, 100.0, &params).unwrap();
        assert_eq!(p.y, 0.0);
    }
}
