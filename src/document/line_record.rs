use crate::config::Settings;
use crate::scanner::{BracketToken, LineScan, ScannerContext, scan_line};

/// Cached scan of one line: the unit of incremental recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub entry: ScannerContext,
    pub tokens: Vec<BracketToken>,
    pub exit: ScannerContext,
}

impl LineRecord {
    pub fn scan(text: &str, line: usize, entry: ScannerContext, settings: &Settings) -> Self {
        let LineScan { tokens, exit } = scan_line(text, line, &entry, settings);
        Self {
            entry,
            tokens,
            exit,
        }
    }

    /// Move every reference to lines at or below `from` by `delta`.
    pub fn shift_lines(&mut self, from: usize, delta: isize) {
        self.entry.shift_lines(from, delta);
        self.exit.shift_lines(from, delta);
        for token in &mut self.tokens {
            token.shift_lines(from, delta);
        }
    }
}
