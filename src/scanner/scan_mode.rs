/// Lexical mode of the scanner between two characters.
///
/// Only `Normal` text can contain bracket tokens; the other modes make their
/// contents opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    /// Inside a string opened by the given quote character
    InString(char),
    InLineComment,
    InBlockComment,
}

impl ScanMode {
    /// Mode carried to the next line. Line comments end with their line.
    pub fn at_line_end(self) -> Self {
        match self {
            ScanMode::InLineComment => ScanMode::Normal,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(ScanMode::default(), ScanMode::Normal);
    }

    #[test]
    fn test_line_comment_ends_at_line_end() {
        assert_eq!(ScanMode::InLineComment.at_line_end(), ScanMode::Normal);
    }

    #[test]
    fn test_multiline_modes_survive_line_end() {
        assert_eq!(
            ScanMode::InBlockComment.at_line_end(),
            ScanMode::InBlockComment
        );
        assert_eq!(
            ScanMode::InString('`').at_line_end(),
            ScanMode::InString('`')
        );
        assert_eq!(ScanMode::Normal.at_line_end(), ScanMode::Normal);
    }
}
