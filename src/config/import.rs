//! Matrix import configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Options for matrix files
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Field delimiter for `.csv` files
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Trim whitespace around headers and fields
    #[serde(default = "default_trim")]
    pub trim: bool,

    /// Worksheet to read from `.xlsx` files; the first one when unset
    #[serde(default)]
    pub worksheet: Option<String>,
}

impl ImportConfig {
    /// Delimiter as the byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, ValidationError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(ValidationError::InvalidDelimiter(self.delimiter))
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.delimiter_byte().map(|_| ())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim: default_trim(),
            worksheet: None,
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_trim() -> bool {
    true
}
