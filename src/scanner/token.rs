use super::context::Position;
use crate::config::BracketRole;

/// Whether a bracket found a structural partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    /// Opener whose partner is not known from its own line
    Pending,
    Matched(Position),
    Orphan,
}

/// One bracket occurrence found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BracketToken {
    pub rule: usize,
    pub role: BracketRole,
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    /// Stack height when the bracket occurred; an opener counts itself
    pub depth: usize,
    /// Index into the rule's color cycle
    pub color_index: usize,
    pub state: MatchState,
}

impl BracketToken {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.start_column)
    }

    pub fn is_orphan(&self) -> bool {
        self.state == MatchState::Orphan
    }

    pub fn partner(&self) -> Option<Position> {
        match self.state {
            MatchState::Matched(partner) => Some(partner),
            MatchState::Pending | MatchState::Orphan => None,
        }
    }

    pub fn shift_lines(&mut self, from: usize, delta: isize) {
        self.line = Position::new(self.line, 0).shifted(from, delta).line;
        if let MatchState::Matched(partner) = self.state {
            self.state = MatchState::Matched(partner.shifted(from, delta));
        }
    }
}
