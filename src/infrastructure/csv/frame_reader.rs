// ============================================================
// FRAME READER
// ============================================================
// Parse headerless sensor CSV files with error handling

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::error::{AppError, Result};
use crate::domain::frame::{Dataset, Frame};

/// Reader for headerless sensor capture files
pub struct FrameReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for FrameReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl FrameReader {
    /// Create a new frame reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a capture file and return its frames in file order
    pub fn read_file(&self, path: &Path) -> Result<Dataset> {
        let content = read_lossy(path)?;
        self.read_content(&content)
    }

    /// Parse CSV content from a string
    pub fn read_content(&self, content: &str) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut frames = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            // Blank lines are already skipped by the csv reader; a row
            // of empty fields (",") is still a real frame and kept
            frames.push(Frame::from_fields(record.iter()));
        }

        Ok(Dataset::new(frames))
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| {
                    line.chars()
                        .filter(|&c| c == char::from(delimiter))
                        .count()
                })
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Read a capture file with automatic delimiter detection
    pub fn read_file_auto_detect(path: &Path) -> Result<Dataset> {
        let content = read_lossy(path)?;
        let delimiter = Self::detect_delimiter(&content);

        let reader = Self::default().with_delimiter(delimiter);
        reader.read_content(&content)
    }
}

/// Read a file as text, replacing invalid UTF-8 rather than failing
fn read_lossy(path: &Path) -> Result<String> {
    let buffer = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            AppError::NotFound(format!("Input file {} does not exist", path.display()))
        }
        _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    Ok(String::from_utf8_lossy(&buffer).to_string())
}
