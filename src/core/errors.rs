/*!
# Error System for BSL Lexer

Ошибки уровня хоста. Сам разбор на токены ошибок не возвращает: любой
некорректный фрагмент становится токеном категории `Error`, поэтому
здесь только то, что происходит до начала сканирования.
*/

use std::path::PathBuf;
use thiserror::Error;

/// Host-level failures: bad dialect selector, bad options, unreadable file
#[derive(Debug, Error)]
pub enum LexerError {
    /// Имя, псевдоним или MIME-тип не соответствует ни одному диалекту
    #[error("unknown lexer dialect: '{0}'")]
    UnknownDialect(String),

    #[error("invalid lexer options: {0}")]
    InvalidOptions(#[from] toml::de::Error),

    #[error("failed to read source file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LexerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dialect_message() {
        let err = LexerError::UnknownDialect("pascal".to_string());
        assert_eq!(err.to_string(), "unknown lexer dialect: 'pascal'");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = LexerError::io(
            "/nonexistent/Module.bsl",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let text = err.to_string();
        assert!(text.contains("Module.bsl"));
        assert!(text.contains("missing"));
    }
}
