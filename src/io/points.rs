//! Read scatter points from CSV.
//!
//! The format is deliberately minimal: one `x,y` row per point, an optional
//! `x,y` header, blank lines ignored. Row order is preserved (it is the
//! point set's insertion order).

use std::path::Path;

use crate::domain::Point;
use crate::error::AppError;

/// Read a points CSV file.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to read points CSV '{}': {e}", path.display())))?;
    parse_points(&text)
        .map_err(|e| AppError::new(2, format!("Invalid points CSV '{}': {e}", path.display())))
}

fn parse_points(text: &str) -> Result<Vec<Point>, String> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Optional header row.
        if idx == 0 && line.eq_ignore_ascii_case("x,y") {
            continue;
        }

        let mut cols = line.split(',');
        let (Some(x_raw), Some(y_raw), None) = (cols.next(), cols.next(), cols.next()) else {
            return Err(format!("line {}: expected exactly two columns", idx + 1));
        };

        let x: f64 = x_raw
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad x value '{}': {e}", idx + 1, x_raw.trim()))?;
        let y: f64 = y_raw
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad y value '{}': {e}", idx + 1, y_raw.trim()))?;

        if !(x.is_finite() && y.is_finite()) {
            return Err(format!("line {}: non-finite coordinate", idx + 1));
        }
        points.push(Point::new(x, y));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let points = parse_points("1.5, 2.0\n3,4\n\n5.5,-6\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(1.5, 2.0),
                Point::new(3.0, 4.0),
                Point::new(5.5, -6.0)
            ]
        );
    }

    #[test]
    fn skips_optional_header() {
        let points = parse_points("x,y\n10,20\n").unwrap();
        assert_eq!(points, vec![Point::new(10.0, 20.0)]);
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(parse_points("1,2,3\n").is_err());
        assert!(parse_points("1\n").is_err());
        assert!(parse_points("a,b\n").is_err());
        assert!(parse_points("1,inf\n").is_err());
    }
}
