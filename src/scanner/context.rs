use std::collections::BTreeMap;

use super::scan_mode::ScanMode;

/// Absolute position of a character in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move positions on or below `from` by `delta` lines.
    pub fn shifted(self, from: usize, delta: isize) -> Self {
        if self.line >= from {
            Self {
                line: self.line.saturating_add_signed(delta),
                column: self.column,
            }
        } else {
            self
        }
    }
}

/// One entry of the open-bracket stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenBracket {
    pub rule: usize,
    pub position: Position,
    /// Color index chosen when the bracket opened
    pub color_index: usize,
}

/// Color index of the most recent opener, per cycling scope.
///
/// Only maintained when a setting makes opener colors depend on the previous
/// opener; otherwise it stays empty and never affects context equality.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleMemory {
    pub consecutive: Option<usize>,
    pub per_rule: BTreeMap<usize, usize>,
}

/// State carried from one character to the next, and across line boundaries.
///
/// Equality of two contexts is the convergence test of incremental updates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannerContext {
    pub mode: ScanMode,
    /// Unclosed openers, outermost first
    pub stack: Vec<OpenBracket>,
    pub cycle: CycleMemory,
}

impl ScannerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth across all rules.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn shift_lines(&mut self, from: usize, delta: isize) {
        for open in &mut self.stack {
            open.position = open.position.shifted(from, delta);
        }
    }
}
