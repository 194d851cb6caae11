// ============================================================
// CONVERT USE CASE
// ============================================================
// Orchestrate capture parsing, coercion, and JSON output

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::error::Result;
use crate::infrastructure::csv::FrameReader;
use crate::infrastructure::json::FrameWriter;

/// Result of one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Number of frames written
    pub frame_count: usize,

    /// Total field count across all frames
    pub field_count: usize,

    /// Processing time in milliseconds
    pub elapsed_ms: u64,
}

/// Capture-to-JSON conversion use case
pub struct Converter {
    /// Detect the delimiter from the file instead of assuming comma
    detect_delimiter: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            detect_delimiter: true,
        }
    }
}

impl Converter {
    /// Create a converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to auto-detect the delimiter
    pub fn with_detect_delimiter(mut self, detect: bool) -> Self {
        self.detect_delimiter = detect;
        self
    }

    /// Convert the capture at `input` into a JSON frame file at `output`.
    ///
    /// The whole dataset is held in memory for the duration of the run;
    /// the output file is created only after parsing succeeds, so a
    /// parse failure never leaves a file behind.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary> {
        let start = Instant::now();

        let dataset = if self.detect_delimiter {
            FrameReader::read_file_auto_detect(input)?
        } else {
            FrameReader::new().read_file(input)?
        };

        FrameWriter::write_file(output, &dataset)?;

        let summary = ConversionSummary {
            frame_count: dataset.len(),
            field_count: dataset.field_count(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            frames = summary.frame_count,
            fields = summary.field_count,
            elapsed_ms = summary.elapsed_ms,
            output = %output.display(),
            "Conversion complete"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use std::fs;

    fn write_capture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_convert_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_capture(dir.path(), "capture.csv", "1,2,3\n4,5,6\n");
        let output = dir.path().join("frames.json");

        let summary = Converter::new().convert(&input, &output).unwrap();

        assert_eq!(summary.frame_count, 2);
        assert_eq!(summary.field_count, 6);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([[1, 2, 3], [4, 5, 6]]));
    }

    #[test]
    fn test_convert_preserves_row_order_and_types() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_capture(dir.path(), "capture.csv", "12.5,N/A\n42,ok\n");
        let output = dir.path().join("frames.json");

        Converter::new().convert(&input, &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([[12.5, "N/A"], [42, "ok"]]));
    }

    #[test]
    fn test_convert_semicolon_capture() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_capture(dir.path(), "capture.csv", "1;2;3\n4;5;6\n");
        let output = dir.path().join("frames.json");

        let summary = Converter::new().convert(&input, &output).unwrap();
        assert_eq!(summary.frame_count, 2);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([[1, 2, 3], [4, 5, 6]]));
    }

    #[test]
    fn test_missing_input_produces_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("frames.json");

        let err = Converter::new().convert(&input, &output).unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_capture(dir.path(), "capture.csv", "7,8\n");
        let output = dir.path().join("frames.json");
        fs::write(&output, "stale").unwrap();

        Converter::new().convert(&input, &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "[[7,8]]");
    }

    #[test]
    fn test_convert_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_capture(dir.path(), "capture.csv", "1,2\n3,4\n");
        let output = dir.path().join("frames.json");

        Converter::new().convert(&input, &output).unwrap();
        let first = fs::read_to_string(&output).unwrap();

        Converter::new().convert(&input, &output).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
    }
}
