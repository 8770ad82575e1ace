//! Query-grid generation.
//!
//! The fitting operations are evaluated on a dense, uniformly stepped set of
//! x-coordinates spanning the visible horizontal extent. The grid belongs to
//! the caller: it is regenerated whenever the viewport changes and stays
//! fixed across point commits.

/// Default sampling step in canvas units.
pub const DEFAULT_STEP: f64 = 1.0;

/// Margin kept clear of both viewport edges, in canvas units.
pub const EDGE_MARGIN: f64 = 2.0;

/// Generate query x-samples for the extent `[x_min, x_max]`.
///
/// Samples start at `x_min + EDGE_MARGIN` and advance by `step` while staying
/// strictly below `x_max - EDGE_MARGIN`. Invalid extents or steps yield an
/// empty grid.
pub fn uniform_grid(x_min: f64, x_max: f64, step: f64) -> Vec<f64> {
    if !(x_min.is_finite() && x_max.is_finite() && step.is_finite() && step > 0.0) {
        return Vec::new();
    }

    let stop = x_max - EDGE_MARGIN;
    let mut out = Vec::new();
    let mut x = x_min + EDGE_MARGIN;
    while x < stop {
        out.push(x);
        x += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_respects_margin_and_step() {
        let grid = uniform_grid(0.0, 10.0, 1.0);
        assert_eq!(grid.first().copied(), Some(EDGE_MARGIN));
        assert!(grid.iter().all(|&x| x < 10.0 - EDGE_MARGIN));
        for pair in grid.windows(2) {
            assert!((pair[1] - pair[0] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_extents_yield_empty_grid() {
        assert!(uniform_grid(10.0, 0.0, 1.0).is_empty());
        assert!(uniform_grid(0.0, 3.0, 1.0).is_empty()); // margin eats the extent
        assert!(uniform_grid(0.0, 10.0, 0.0).is_empty());
        assert!(uniform_grid(0.0, f64::NAN, 1.0).is_empty());
    }
}
