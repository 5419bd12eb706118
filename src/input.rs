use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::ColorizerError;

/// Read document text from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read the lines of a document
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Document lines without terminators
    /// * `Err(ColorizerError)` - If an IO error occurs
    pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>, ColorizerError> {
        let text = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Ok(split_lines(&text))
    }
}

/// Split text into lines, accepting both `\n` and `\r\n` terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
