pub mod use_cases;

pub use use_cases::convert::{ConversionSummary, Converter};
