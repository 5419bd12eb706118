//! bracket-colorizer library - Incremental bracket pair colorization
//!
//! Matches bracket pairs line by line, carrying scanner state across lines,
//! and assigns each bracket a color from its nesting depth. Edits re-scan
//! only the lines whose state can have changed.

pub mod color_policy;
pub mod colorizer;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod report;
pub mod scanner;

// Re-export commonly used types for convenience
pub use colorizer::{Colorizer, DocumentEvent, TextSource};
pub use config::{ColorMode, Config, Settings};
pub use document::{ColorRange, ColorRanges, DocumentState, LineEdit};
pub use error::ColorizerError;
