/*!
# Dialect registry

Статические метаданные для хоста подсветки: отображаемое имя,
псевдонимы, маски файлов и MIME-типы каждого диалекта.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{LexerError, Result};

/// Registration metadata of one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns, `*.ext` form only
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

static BSL_INFO: LexerInfo = LexerInfo {
    name: "1C (BSL) Lexer",
    aliases: &["bsl", "os"],
    filenames: &["*.bsl", "*.os"],
    mimetypes: &["text/x-bsl"],
};

static SDBL_INFO: LexerInfo = LexerInfo {
    name: "1C (SDBL) Lexer",
    aliases: &["sdbl"],
    filenames: &["*.sdbl"],
    mimetypes: &["text/x-sdbl"],
};

/// Top-level dialects a caller can select. The access-constraint
/// language is reachable only through string literals of BSL code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Встроенный язык (и OneScript)
    #[default]
    Bsl,
    /// Язык запросов
    Sdbl,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Bsl, Dialect::Sdbl];

    pub fn info(self) -> &'static LexerInfo {
        match self {
            Dialect::Bsl => &BSL_INFO,
            Dialect::Sdbl => &SDBL_INFO,
        }
    }

    /// Case-insensitive lookup by alias or display name
    pub fn from_alias(alias: &str) -> Result<Dialect> {
        let wanted = alias.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| {
                let info = dialect.info();
                info.name.eq_ignore_ascii_case(wanted)
                    || info.aliases.iter().any(|a| a.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| LexerError::UnknownDialect(alias.to_string()))
    }

    pub fn for_mimetype(mimetype: &str) -> Result<Dialect> {
        Self::ALL
            .into_iter()
            .find(|dialect| {
                dialect
                    .info()
                    .mimetypes
                    .iter()
                    .any(|m| m.eq_ignore_ascii_case(mimetype.trim()))
            })
            .ok_or_else(|| LexerError::UnknownDialect(mimetype.to_string()))
    }

    /// Dialect whose filename pattern matches the last path component
    pub fn for_filename(path: &str) -> Option<Dialect> {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path).to_lowercase();
        Self::ALL.into_iter().find(|dialect| {
            dialect.info().filenames.iter().any(|pattern| {
                pattern
                    .strip_prefix('*')
                    .is_some_and(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
            })
        })
    }
}

impl FromStr for Dialect {
    type Err = LexerError;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::from_alias(s)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Bsl => write!(f, "bsl"),
            Dialect::Sdbl => write!(f, "sdbl"),
        }
    }
}
