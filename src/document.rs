//! Bracket state of one open document.
//!
//! A [`DocumentState`] caches one [`LineRecord`] per line. A full parse scans
//! every line, feeding each line the previous line's exit context. An edit
//! re-scans the replaced lines, then keeps scanning below them until a line's
//! new exit context equals the one cached for it. From that line on nothing
//! can differ, because a line's scan depends only on its text and its entry
//! context. The result is always identical to a full re-parse.

mod color_ranges;
mod edit;
mod line_record;

pub use color_ranges::{ColorRange, ColorRanges};
pub use edit::LineEdit;
pub use line_record::LineRecord;

use std::collections::HashMap;
use std::sync::Arc;

use crate::color_policy::color_for;
use crate::config::{BracketRole, Settings};
use crate::scanner::{BracketToken, MatchState, Position, ScannerContext};

/// Work done by one incremental update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateStats {
    pub rescanned_lines: usize,
    /// Line whose exit context matched the cache, if propagation stopped early
    pub converged_at: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    settings: Arc<Settings>,
    records: Vec<LineRecord>,
    /// Opener position to closer position for every matched pair
    partners: HashMap<Position, Position>,
}

impl DocumentState {
    /// Full parse of `lines`.
    pub fn parse<S: AsRef<str>>(lines: &[S], settings: Arc<Settings>) -> Self {
        let mut state = Self {
            settings,
            records: Vec::with_capacity(lines.len()),
            partners: HashMap::new(),
        };
        state.reparse(lines);
        state
    }

    /// Discard every cached line and parse `lines` from scratch.
    pub fn reparse<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.records.clear();
        let mut entry = ScannerContext::new();
        for (line, text) in lines.iter().enumerate() {
            let record = LineRecord::scan(text.as_ref(), line, entry, &self.settings);
            entry = record.exit.clone();
            self.records.push(record);
        }
        self.rebuild_partners();
        log::debug!(
            "Full parse: {} lines, {} pairs",
            self.records.len(),
            self.partners.len()
        );
    }

    /// Replace the settings and re-parse, since every color may change.
    pub fn set_settings<S: AsRef<str>>(&mut self, settings: Arc<Settings>, lines: &[S]) {
        self.settings = settings;
        self.reparse(lines);
    }

    /// Update after `edit`, given the complete text of the edited document.
    pub fn apply_edit<S: AsRef<str>>(&mut self, edit: LineEdit, lines: &[S]) -> UpdateStats {
        let Some(edit) = edit.clamp(self.records.len(), lines.len()) else {
            log::debug!(
                "Edit {:?} inconsistent with {} cached lines, full parse",
                edit,
                self.records.len()
            );
            self.reparse(lines);
            return UpdateStats {
                rescanned_lines: lines.len(),
                converged_at: None,
            };
        };

        let delta = edit.line_delta();
        let shift = |mut record: LineRecord| {
            if delta != 0 {
                record.shift_lines(edit.end_line, delta);
            }
            record
        };

        // Pairs closed on replaced or re-scanned lines, in pre-edit positions
        let mut stale_pairs: Vec<(Position, Position)> = self
            .records
            .drain(edit.start_line..edit.end_line)
            .flat_map(|record| closed_pairs(&record).collect::<Vec<_>>())
            .collect();
        let mut fresh_pairs: Vec<(Position, Position)> = Vec::new();
        let mut cached_tail = self.records.split_off(edit.start_line).into_iter();

        let mut entry = self
            .records
            .last()
            .map(|record| record.exit.clone())
            .unwrap_or_default();

        for line in edit.start_line..edit.start_line + edit.new_line_count {
            let record = LineRecord::scan(lines[line].as_ref(), line, entry, &self.settings);
            entry = record.exit.clone();
            fresh_pairs.extend(closed_pairs(&record));
            self.records.push(record);
        }

        let mut rescanned_lines = edit.new_line_count;
        let mut converged_at = None;
        while let Some(cached) = cached_tail.next() {
            stale_pairs.extend(closed_pairs(&cached));
            let cached = shift(cached);

            let line = self.records.len();
            let record = LineRecord::scan(lines[line].as_ref(), line, entry, &self.settings);
            rescanned_lines += 1;

            let converged = record.exit == cached.exit;
            entry = record.exit.clone();
            fresh_pairs.extend(closed_pairs(&record));
            self.records.push(record);

            if converged {
                converged_at = Some(line);
                self.records.extend(cached_tail.by_ref().map(shift));
                break;
            }
        }

        self.update_partners(&stale_pairs, fresh_pairs, edit.end_line, delta);

        log::debug!(
            "Incremental update {:?}: rescanned {} lines, converged at {:?}",
            edit,
            rescanned_lines,
            converged_at
        );

        UpdateStats {
            rescanned_lines,
            converged_at,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn line_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    /// Closer position of the pair opened at `open`.
    pub fn partner_of(&self, open: Position) -> Option<Position> {
        self.partners.get(&open).copied()
    }

    /// Tokens of one line with final match states; empty when out of range.
    pub fn line_tokens(&self, line: usize) -> Vec<BracketToken> {
        self.records
            .get(line)
            .map(|record| record.tokens.iter().map(|t| self.resolve(t)).collect())
            .unwrap_or_default()
    }

    /// Every token in document order with final match states.
    pub fn tokens(&self) -> impl Iterator<Item = BracketToken> + '_ {
        self.records
            .iter()
            .flat_map(|record| record.tokens.iter())
            .map(|token| self.resolve(token))
    }

    pub fn color_ranges(&self) -> ColorRanges {
        self.collect_ranges(self.tokens())
    }

    pub fn line_color_ranges(&self, line: usize) -> ColorRanges {
        self.collect_ranges(self.line_tokens(line).into_iter())
    }

    /// Openers only learn their partner once a later closer pops them.
    fn resolve(&self, token: &BracketToken) -> BracketToken {
        let mut resolved = token.clone();
        if token.role == BracketRole::Open {
            resolved.state = match self.partners.get(&token.position()) {
                Some(&close) => MatchState::Matched(close),
                None => MatchState::Orphan,
            };
        }
        resolved
    }

    fn rebuild_partners(&mut self) {
        self.partners = self
            .records
            .iter()
            .flat_map(closed_pairs)
            .collect();
    }

    /// Swap the pairs of re-scanned lines and move the kept ones with the edit.
    ///
    /// The kept pairs come from lines above the edit or below convergence,
    /// which match a full parse, so their openers stay distinct after shifting.
    fn update_partners(
        &mut self,
        stale: &[(Position, Position)],
        fresh: Vec<(Position, Position)>,
        from: usize,
        delta: isize,
    ) {
        for (open, _) in stale {
            self.partners.remove(open);
        }
        if delta != 0 {
            self.partners = self
                .partners
                .drain()
                .map(|(open, close)| (open.shifted(from, delta), close.shifted(from, delta)))
                .collect();
        }
        self.partners.extend(fresh);
    }

    fn collect_ranges(&self, tokens: impl Iterator<Item = BracketToken>) -> ColorRanges {
        let mut ranges = ColorRanges::new();
        for token in tokens {
            let color = color_for(&token, &self.settings);
            ranges
                .entry(color.to_string())
                .or_default()
                .push(ColorRange::on_line(
                    token.line,
                    token.start_column,
                    token.end_column,
                ));
        }
        ranges
    }
}

/// (opener, closer) positions of the pairs closed on one line.
fn closed_pairs(record: &LineRecord) -> impl Iterator<Item = (Position, Position)> + '_ {
    record
        .tokens
        .iter()
        .filter(|token| token.role == BracketRole::Close)
        .filter_map(|token| token.partner().map(|open| (open, token.position())))
}
