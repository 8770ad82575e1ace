//! Export computed overlays to CSV and JSON.
//!
//! CSV is meant for spreadsheets and quick downstream plotting; JSON
//! (`domain::OverlayFile`) is the portable representation of one recompute.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::OverlaySet;
use crate::domain::OverlayFile;
use crate::error::AppError;

/// Write the overlays as CSV: one row per query x, one column per series
/// that produced output.
pub fn write_overlay_csv(path: &Path, query: &[f64], overlays: &OverlaySet) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    let series = overlays.drawable(query.len());

    // Header
    let mut header = String::from("x");
    for (model, _) in &series {
        header.push(',');
        header.push_str(&model_column(*model));
    }
    writeln!(file, "{header}")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, x) in query.iter().enumerate() {
        let mut row = format!("{x:.6}");
        for (_, ys) in &series {
            row.push_str(&format!(",{:.6}", ys[i]));
        }
        writeln!(file, "{row}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write an overlay JSON file.
pub fn write_overlay_json(path: &Path, overlay: &OverlayFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create overlay JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, overlay)
        .map_err(|e| AppError::new(2, format!("Failed to write overlay JSON: {e}")))?;

    Ok(())
}

fn model_column(model: crate::domain::ModelKind) -> String {
    model.display_name().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;

    #[test]
    fn column_names_are_snake_case() {
        assert_eq!(model_column(ModelKind::Lagrange), "lagrange");
        assert_eq!(model_column(ModelKind::Gaussian), "gaussian_kernel");
        assert_eq!(model_column(ModelKind::LeastSquares), "least_squares");
        assert_eq!(model_column(ModelKind::Ridge), "ridge_regression");
    }
}
