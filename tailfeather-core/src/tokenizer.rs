//! Splitting lines into fields

use crate::config::LineFormat;

/// Splits lines on a fixed delimiter
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: String,
}

impl Tokenizer {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Build a tokenizer using the format's input delimiter
    pub fn from_format(format: &LineFormat) -> Self {
        Self::new(format.input_delimiter.clone())
    }

    /// Split `line` into its fields.
    ///
    /// Every occurrence of the delimiter separates two fields, so adjacent
    /// delimiters produce empty fields and an empty line is one empty field.
    /// An empty delimiter splits the line into individual characters, which
    /// makes an empty line the only way to get zero fields.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if self.delimiter.is_empty() {
            return line
                .char_indices()
                .map(|(i, c)| &line[i..i + c.len_utf8()])
                .collect();
        }
        line.split(self.delimiter.as_str()).collect()
    }
}
