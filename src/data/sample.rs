//! Deterministic synthetic scatters.
//!
//! A seeded generator that drops noisy points around a simple base shape, so
//! the overlays have something to chew on before (or instead of) hand-placed
//! clicks. Same seed + settings = same scatter.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Point, SampleShape, Viewport};
use crate::error::AppError;
use crate::fit::EDGE_MARGIN;

/// Generate `count` noisy points around `shape`, sorted by x.
///
/// X-coordinates are drawn uniformly inside the viewport (minus the query
/// margin); y-coordinates are the base shape plus `Normal(0, noise)`.
pub fn generate_scatter(
    shape: SampleShape,
    count: usize,
    seed: u64,
    noise: f64,
    viewport: &Viewport,
) -> Result<Vec<Point>, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Demo point count must be > 0."));
    }
    if !(noise.is_finite() && noise >= 0.0) {
        return Err(AppError::new(2, format!("Invalid noise level: {noise}.")));
    }
    if !viewport.is_valid() {
        return Err(AppError::new(2, "Invalid viewport for demo generation."));
    }

    let x_lo = viewport.x_min + EDGE_MARGIN;
    let x_hi = viewport.x_max - EDGE_MARGIN;
    if x_hi <= x_lo {
        return Err(AppError::new(2, "Viewport too narrow for demo generation."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise.max(1e-12))
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.gen_range(x_lo..=x_hi);
        let u = (x - viewport.x_min) / viewport.width();
        let y = base_shape(shape, u, viewport) + normal.sample(&mut rng);
        points.push(Point::new(x, y));
    }

    // Sorted left-to-right so the scatter reads like a curve; insertion order
    // only matters for undo, and a fresh demo replaces the whole set anyway.
    points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
    Ok(points)
}

/// Base y-value for a normalized horizontal position `u` in `[0, 1]`.
fn base_shape(shape: SampleShape, u: f64, viewport: &Viewport) -> f64 {
    let h = viewport.height();
    let mid = viewport.y_min + 0.5 * h;
    match shape {
        SampleShape::Line => viewport.y_min + 0.25 * h + 0.5 * h * u,
        SampleShape::Parabola => viewport.y_min + 0.15 * h + 2.8 * h * (u - 0.5) * (u - 0.5),
        SampleShape::Sine => mid + 0.35 * h * (std::f64::consts::TAU * u).sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_scatter() {
        let vp = Viewport::default();
        let a = generate_scatter(SampleShape::Sine, 10, 7, 12.0, &vp).unwrap();
        let b = generate_scatter(SampleShape::Sine, 10, 7, 12.0, &vp).unwrap();
        assert_eq!(a, b);

        let c = generate_scatter(SampleShape::Sine, 10, 8, 12.0, &vp).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn scatter_stays_inside_horizontal_extent() {
        let vp = Viewport::default();
        let points = generate_scatter(SampleShape::Parabola, 50, 1, 0.0, &vp).unwrap();
        assert_eq!(points.len(), 50);
        for p in &points {
            assert!(p.x >= vp.x_min + EDGE_MARGIN && p.x <= vp.x_max - EDGE_MARGIN);
            assert!(p.y.is_finite());
        }
        // Sorted by x.
        for pair in points.windows(2) {
            assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        let vp = Viewport::default();
        assert!(generate_scatter(SampleShape::Line, 0, 1, 1.0, &vp).is_err());
    }
}
