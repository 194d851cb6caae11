// ============================================================
// FRAME TYPES
// ============================================================
// Data structures representing parsed sensor frames

use serde::{Deserialize, Serialize};

/// A single field value in a frame, typed by content.
///
/// Coercion order is fixed: integer first, then float, then text.
/// Untagged so JSON output carries plain numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce a raw CSV field into a typed value.
    ///
    /// The raw text is taken as-is; whitespace trimming is the reader's
    /// responsibility. Non-finite float spellings ("NaN", "inf") stay
    /// text, since JSON has no number encoding for them.
    pub fn coerce(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return FieldValue::Integer(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            if x.is_finite() {
                return FieldValue::Float(x);
            }
        }

        FieldValue::Text(raw.to_string())
    }

    /// Whether the value coerced to a number
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Integer(_) | FieldValue::Float(_))
    }
}

/// One sampled instant of sensor data (one CSV row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    pub values: Vec<FieldValue>,
}

impl Frame {
    /// Build a frame by coercing each raw field in order
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            values: fields.into_iter().map(FieldValue::coerce).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The full ordered collection of frames for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub frames: Vec<Frame>,
}

impl Dataset {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total field count across all frames
    pub fn field_count(&self) -> usize {
        self.frames.iter().map(|f| f.len()).sum()
    }
}
