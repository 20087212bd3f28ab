//! Line format configuration
//!
//! Delimiters are carried in an explicit [`LineFormat`] value handed to the
//! tokenizer and renderer. Field trackers take no configuration at all.

use crate::types::{Result, TailfeatherError};
use serde::{Deserialize, Serialize};

/// How lines are split into fields and how fields are joined on output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFormat {
    /// Separator used to split input lines into fields (default: a single space)
    #[serde(default = "default_input_delimiter")]
    pub input_delimiter: String,

    /// Separator written between rendered fields (default: a tab)
    #[serde(default = "default_output_delimiter")]
    pub output_delimiter: String,
}

fn default_input_delimiter() -> String {
    " ".to_string()
}

fn default_output_delimiter() -> String {
    "\t".to_string()
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            input_delimiter: default_input_delimiter(),
            output_delimiter: default_output_delimiter(),
        }
    }
}

impl LineFormat {
    /// Create a format with the default delimiters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input delimiter
    pub fn with_input_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.input_delimiter = delimiter.into();
        self
    }

    /// Set the output delimiter
    pub fn with_output_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.output_delimiter = delimiter.into();
        self
    }

    /// Check that the format can actually split lines.
    ///
    /// Lines never contain line breaks, so an input delimiter with one would
    /// silently leave every line as a single field.
    pub fn validate(&self) -> Result<()> {
        if self.input_delimiter.contains(['\n', '\r']) {
            return Err(TailfeatherError::InvalidDelimiter(
                self.input_delimiter.clone(),
            ));
        }
        Ok(())
    }
}
