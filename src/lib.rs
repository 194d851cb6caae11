pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ConversionSummary, Converter};
pub use domain::error::{AppError, Result};
pub use domain::frame::{Dataset, FieldValue, Frame};
pub use infrastructure::config::Settings;
