/*!
# BSL Lexer

Лексический анализатор для подсветки синтаксиса 1С:Предприятия: встроенный
язык (BSL), язык запросов (SDBL) и язык ограничений доступа, который
распознаётся внутри строковых литералов.

## Features

- **Ordered rules with a mode stack** for literals, parameters, annotations,
  preprocessor conditions and documentation comments
- **Embedded dialects**: query and access-restriction text inside string
  literals is tokenized by its own scanner
- **Error recovery**: malformed code becomes `Error` tokens, never a failure
- **Lazy or eager** token streams covering the input without gaps

## Usage

```rust
use bsl_lexer::lexer::{BslLexer, Dialect, TokenKind};

let lexer = BslLexer::new(Dialect::Bsl);
let tokens = lexer.tokenize("Сообщить(\"Привет\");");
assert_eq!(tokens[0].kind, TokenKind::BuiltinFunction);
```
*/

pub mod options;
pub mod registry;
pub mod token;

pub(crate) mod classify;
pub(crate) mod engine;
pub(crate) mod lookahead;
pub(crate) mod modes;

pub use engine::Tokens;
pub use options::LexerOptions;
pub use registry::{Dialect, LexerInfo};
pub use token::{significant, Token, TokenKind, TokenStats};

use std::borrow::Cow;

use modes::ModeId;

fn root_mode(dialect: Dialect) -> ModeId {
    match dialect {
        Dialect::Bsl => ModeId::Root,
        Dialect::Sdbl => ModeId::SdblRoot,
    }
}

/// Lexer for one dialect. Cheap to create; all rule tables are shared
/// and built once on first use.
#[derive(Debug, Clone, Default)]
pub struct BslLexer {
    dialect: Dialect,
    options: LexerOptions,
}

impl BslLexer {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            options: LexerOptions::default(),
        }
    }

    pub fn with_options(dialect: Dialect, options: LexerOptions) -> Self {
        Self { dialect, options }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Text after option preprocessing; tokens of [`BslLexer::tokenize`]
    /// cover exactly this text
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.options.apply(text)
    }

    /// Lazy token stream over `text` as is, options are not applied
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'t> {
        Tokens::new(text, root_mode(self.dialect))
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let prepared = self.prepare(text);
        let tokens: Vec<Token> = self.tokens(&prepared).collect();
        tracing::trace!(
            dialect = %self.dialect,
            bytes = prepared.len(),
            tokens = tokens.len(),
            "tokenized"
        );
        tokens
    }

    /// Gets token statistics
    pub fn token_stats(&self, tokens: &[Token]) -> TokenStats {
        TokenStats::collect(tokens)
    }
}

/// Tokenizes `text` with default options
pub fn tokenize(text: &str, dialect: Dialect) -> Vec<Token> {
    BslLexer::new(dialect).tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn significant_kinds(text: &str) -> Vec<TokenKind> {
        let tokens = tokenize(text, Dialect::Bsl);
        significant(&tokens).map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokens_cover_input() {
        let text = "Процедура Тест()\n\tА = \"x\";\nКонецПроцедуры";
        let joined: String = tokenize(text, Dialect::Bsl).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_lazy_and_eager_agree() {
        let lexer = BslLexer::new(Dialect::Bsl);
        let text = "Если А Тогда Б = 1; КонецЕсли;";
        let lazy: Vec<Token> = lexer.tokens(text).collect();
        assert_eq!(lazy, lexer.tokenize(text));
    }

    #[test]
    fn test_options_are_applied_before_scanning() {
        let lexer = BslLexer::with_options(
            Dialect::Bsl,
            LexerOptions {
                strip_bom: true,
                ensure_trailing_newline: true,
            },
        );
        let tokens = lexer.tokenize("\u{feff}А = 1;");
        assert_eq!(tokens[0].text, "А");
        assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("\n"));
    }

    #[test]
    fn test_sdbl_dialect() {
        let tokens = tokenize("ВЫБРАТЬ Поле ИЗ Таблица", Dialect::Sdbl);
        let kinds: Vec<_> = significant(&tokens).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KeywordDeclaration,
                TokenKind::IdentifierVariable,
                TokenKind::KeywordDeclaration,
                TokenKind::IdentifierVariable,
            ]
        );
    }

    #[test]
    fn test_stats() {
        let lexer = BslLexer::new(Dialect::Bsl);
        let tokens = lexer.tokenize("А = Неопределено(1);");
        let stats = lexer.token_stats(&tokens);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.identifiers, 1);
    }

    #[test]
    fn test_keywords_in_any_case() {
        assert_eq!(significant_kinds("ЕСЛИ А ТОГДА"), significant_kinds("если А тогда"));
        assert_eq!(significant_kinds("If"), vec![TokenKind::Keyword]);
    }
}
