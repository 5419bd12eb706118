//! Rendering of a parsed document for the command line

use crate::color_policy::color_for;
use crate::document::{ColorRanges, DocumentState};
use crate::error::ColorizerError;
use crate::scanner::BracketToken;

/// One `line:col color` line per bracket, in document order.
///
/// Restricted to `line` when given; a line outside the document renders empty.
pub fn render_text(document: &DocumentState, line: Option<usize>) -> String {
    let tokens: Vec<BracketToken> = match line {
        Some(line) => document.line_tokens(line),
        None => document.tokens().collect(),
    };

    tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{} {}",
                token.line,
                token.start_column,
                color_for(token, document.settings())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Color ranges as pretty-printed JSON.
pub fn render_json(ranges: &ColorRanges) -> Result<String, ColorizerError> {
    Ok(serde_json::to_string_pretty(ranges)?)
}
