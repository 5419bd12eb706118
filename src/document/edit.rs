/// A contiguous replacement of whole lines.
///
/// Old lines `start_line..end_line` are replaced by `new_line_count` lines.
/// An insertion has `start_line == end_line`, a deletion has
/// `new_line_count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEdit {
    pub start_line: usize,
    pub end_line: usize,
    pub new_line_count: usize,
}

impl LineEdit {
    pub fn new(start_line: usize, end_line: usize, new_line_count: usize) -> Self {
        Self {
            start_line,
            end_line: end_line.max(start_line),
            new_line_count,
        }
    }

    /// Edit that replaces lines in place without changing the line count.
    pub fn lines_changed(start_line: usize, end_line: usize) -> Self {
        Self::new(start_line, end_line, end_line.saturating_sub(start_line))
    }

    pub fn old_line_count(&self) -> usize {
        self.end_line - self.start_line
    }

    /// Change in document length caused by this edit.
    pub fn line_delta(&self) -> isize {
        self.new_line_count as isize - self.old_line_count() as isize
    }

    /// Fit the edit to a document that had `old_len` lines and now has `new_len`.
    ///
    /// Returns `None` when no edit of this shape can explain the length change,
    /// in which case the caller must fall back to a full parse.
    pub fn clamp(self, old_len: usize, new_len: usize) -> Option<Self> {
        let start_line = self.start_line.min(old_len);
        let end_line = self.end_line.clamp(start_line, old_len);
        let kept = old_len - (end_line - start_line);
        let new_line_count = new_len.checked_sub(kept)?;
        if new_line_count != self.new_line_count {
            log::debug!(
                "Edit {:?} does not match document length {} -> {}, adjusting",
                self,
                old_len,
                new_len
            );
        }
        Some(Self {
            start_line,
            end_line,
            new_line_count,
        })
    }

    /// Combine this edit with a `next` edit expressed in post-`self` coordinates.
    ///
    /// The result covers both, expressed against the document before `self`.
    pub fn merge(self, next: LineEdit) -> LineEdit {
        let region_start = self.start_line.min(next.start_line);
        let region_end = (self.start_line + self.new_line_count).max(next.end_line);

        // Lines after our new region map back to old coordinates by the delta
        let start_line = region_start;
        let end_line = (region_end as isize - self.line_delta()) as usize;
        let region_len = region_end - region_start;
        let new_line_count = region_len - next.old_line_count() + next.new_line_count;

        LineEdit {
            start_line,
            end_line,
            new_line_count,
        }
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod edit_tests;
