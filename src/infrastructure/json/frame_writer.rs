// ============================================================
// FRAME WRITER
// ============================================================
// Write a dataset as a JSON array of per-frame arrays

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::frame::Dataset;

/// Writer for the viewer's JSON frame format
pub struct FrameWriter;

impl FrameWriter {
    /// Serialize the dataset to `path`, overwriting any existing file.
    ///
    /// No atomic write: a failure mid-write can leave a truncated file,
    /// matching the behavior of the capture tooling this replaces.
    pub fn write_file(path: &Path, dataset: &Dataset) -> Result<()> {
        let file = File::create(path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, dataset).map_err(|e| {
            AppError::IoError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        writer.flush().map_err(|e| {
            AppError::IoError(format!("Failed to flush {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Serialize the dataset to a JSON string (for tests and in-memory use)
    pub fn to_json_string(dataset: &Dataset) -> Result<String> {
        serde_json::to_string(dataset)
            .map_err(|e| AppError::IoError(format!("Failed to serialize dataset: {}", e)))
    }
}
