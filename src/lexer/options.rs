//! Lexer options.
//!
//! Загружаются из TOML, например секции `[lexer]` файла настроек хоста:
//!
//! ```toml
//! strip_bom = true
//! ensure_trailing_newline = true
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

use crate::core::errors::{LexerError, Result};
use crate::core::fs_utils::strip_bom;

/// Text preprocessing applied before scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerOptions {
    /// Drop a leading U+FEFF
    pub strip_bom: bool,

    /// Append `\n` when the text does not end with one
    pub ensure_trailing_newline: bool,
}

impl LexerOptions {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| LexerError::io(path, source))?;
        let options = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?options, "loaded lexer options");
        Ok(options)
    }

    /// The text the scanner actually sees
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let text = if self.strip_bom { strip_bom(text) } else { text };
        if self.ensure_trailing_newline && !text.ends_with('\n') {
            Cow::Owned(format!("{text}\n"))
        } else {
            Cow::Borrowed(text)
        }
    }
}
