//! Line-at-a-time bracket scanner.
//!
//! [`scan_line`] is a pure function of the line text, its line number, the
//! entry [`ScannerContext`] and the settings. Strings (`'`, `"`, `` ` ``),
//! line comments (`//`) and block comments (`/* */`) hide brackets. A closer
//! only pops the stack when the innermost open bracket belongs to the same
//! rule; otherwise it is an orphan and the stack is left alone.

mod context;
mod scan_mode;
mod token;

pub use context::{CycleMemory, OpenBracket, Position, ScannerContext};
pub use scan_mode::ScanMode;
pub use token::{BracketToken, MatchState};

use memchr::memmem;

use crate::color_policy::{close_color_index, open_color_index};
use crate::config::{BracketRole, QUOTE_CHARS, Settings};

/// Tokens found on one line and the context handed to the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    pub tokens: Vec<BracketToken>,
    pub exit: ScannerContext,
}

/// Scan one line of text starting from `entry`.
///
/// Columns are character offsets within the line.
pub fn scan_line(text: &str, line: usize, entry: &ScannerContext, settings: &Settings) -> LineScan {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let bytes = text.as_bytes();
    let mut context = entry.clone();
    let mut tokens = Vec::new();
    // Run length of backslashes directly before the current character
    let mut backslashes = 0usize;
    let mut column = 0;

    while column < chars.len() {
        let (offset, ch) = chars[column];
        let next = chars.get(column + 1).map(|&(_, c)| c);

        match context.mode {
            ScanMode::InBlockComment => {
                match memmem::find(&bytes[offset..], b"*/") {
                    Some(found) => {
                        let end = offset + found + 2;
                        column = chars.partition_point(|&(o, _)| o < end);
                        context.mode = ScanMode::Normal;
                    }
                    None => column = chars.len(),
                }
                backslashes = 0;
                continue;
            }
            ScanMode::InLineComment => break,
            ScanMode::InString(quote) => {
                if ch == quote && backslashes % 2 == 0 {
                    context.mode = ScanMode::Normal;
                }
            }
            ScanMode::Normal => {
                if ch == '/' && next == Some('/') {
                    context.mode = ScanMode::InLineComment;
                    break;
                }
                if ch == '/' && next == Some('*') {
                    context.mode = ScanMode::InBlockComment;
                    column += 2;
                    backslashes = 0;
                    continue;
                }

                if QUOTE_CHARS.contains(&ch) {
                    if backslashes % 2 == 0 {
                        context.mode = ScanMode::InString(ch);
                    }
                } else if let Some((rule, role)) = settings.classify(ch) {
                    let token = match role {
                        BracketRole::Open => open_bracket(&mut context, settings, rule, line, column),
                        BracketRole::Close => close_bracket(&mut context, settings, rule, line, column),
                    };
                    tokens.push(token);
                }
            }
        }

        backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
        column += 1;
    }

    context.mode = context.mode.at_line_end();
    LineScan {
        tokens,
        exit: context,
    }
}

fn open_bracket(
    context: &mut ScannerContext,
    settings: &Settings,
    rule: usize,
    line: usize,
    column: usize,
) -> BracketToken {
    let color_index = open_color_index(settings, rule, &context.stack, &mut context.cycle);
    context.stack.push(OpenBracket {
        rule,
        position: Position::new(line, column),
        color_index,
    });

    BracketToken {
        rule,
        role: BracketRole::Open,
        line,
        start_column: column,
        end_column: column + 1,
        depth: context.depth(),
        color_index,
        state: MatchState::Pending,
    }
}

fn close_bracket(
    context: &mut ScannerContext,
    settings: &Settings,
    rule: usize,
    line: usize,
    column: usize,
) -> BracketToken {
    let depth = context.depth();
    let top_matches = context.stack.last().is_some_and(|top| top.rule == rule);
    let frame = if top_matches { context.stack.pop() } else { None };

    let (color_index, state) = match frame {
        Some(frame) => (
            close_color_index(settings, &frame, &context.stack),
            MatchState::Matched(frame.position),
        ),
        None => (0, MatchState::Orphan),
    };

    BracketToken {
        rule,
        role: BracketRole::Close,
        line,
        start_column: column,
        end_column: column + 1,
        depth,
        color_index,
        state,
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
