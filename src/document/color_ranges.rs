use std::collections::BTreeMap;

use serde::Serialize;

/// A colored span, line/column based, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl ColorRange {
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start_line: line,
            start_column,
            end_line: line,
            end_column,
        }
    }
}

/// Ranges grouped by color name, each group in document order.
pub type ColorRanges = BTreeMap<String, Vec<ColorRange>>;
