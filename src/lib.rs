/*!
# BSL Lexer

Syntax-highlighting lexer for 1C:Enterprise: the built-in language (BSL,
also OneScript), the query language (SDBL) and the access-restriction
language found inside string literals.

## Core Features

- **Classification only**: source text becomes a flat sequence of
  `(span, category)` tokens, categories follow the Pygments hierarchy
- **Bilingual, case-insensitive** keyword, builtin and class tables
- **Context-aware identifiers**: `Строка(1)` is a builtin call, `Строка` a variable
- **Embedded dialects**: query and restriction text inside literals is
  tokenized by its own scanner at absolute offsets
- **Never fails on bad code**: malformed fragments become `Error` tokens

## Architecture

```text
BSL Lexer
├── Core       - errors, line/column index, source file loading
├── Keywords   - lexical tables of the three dialects
└── Lexer      - scanner engine, modes, disambiguation, public API
```

## Usage

```rust
use bsl_lexer::{tokenize, Dialect, TokenKind};

let tokens = tokenize("X = Неопределено(123);", Dialect::Bsl);
assert!(tokens.iter().any(|t| t.kind == TokenKind::Error && t.text == "Неопределено(123)"));
```
*/

pub mod core;
pub mod keywords;
pub mod lexer;

pub use crate::core::{read_bsl_file, LexerError, LineIndex, Position};
pub use lexer::{
    significant, tokenize, BslLexer, Dialect, LexerInfo, LexerOptions, Token, TokenKind,
    TokenStats, Tokens,
};

use std::path::Path;

/// Reads a module file and tokenizes it with the dialect its name implies
/// (BSL when the extension is not registered)
pub fn tokenize_file<P: AsRef<Path>>(path: P) -> crate::core::Result<Vec<Token>> {
    let path = path.as_ref();
    let content = read_bsl_file(path)?;
    let dialect = path
        .to_str()
        .and_then(Dialect::for_filename)
        .unwrap_or_default();
    Ok(tokenize(&content, dialect))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        assert!(tokenize("", Dialect::Bsl).is_empty());
    }

    #[test]
    fn test_lexer_functionality() {
        let lexer = BslLexer::new(Dialect::Bsl);
        let tokens = lexer.tokenize("Процедура Тест() КонецПроцедуры");
        assert!(!tokens.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_tokenize_file_picks_dialect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Запрос.sdbl");
        std::fs::write(&path, "ВЫБРАТЬ 1").unwrap();
        let tokens = tokenize_file(&path).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::KeywordDeclaration);
    }
}
