//! Export the raw samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts, e.g. to rebuild the histogram with different binning.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::AppError;

/// Write the dataset's samples to a CSV file.
pub fn write_samples_csv(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "index,value,seed")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for (i, v) in dataset.samples.iter().enumerate() {
        writeln!(file, "{i},{v:.10},{}", dataset.seed)
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
