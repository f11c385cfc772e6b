/*!
# Token model

Категории токенов совпадают с иерархией Pygments, чтобы хосты
подсветки могли напрямую сопоставлять их со стилями.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::position::{LineIndex, Position};

/// Closed category taxonomy shared by all dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Whitespace and newlines
    Text,
    Keyword,
    KeywordDeclaration,
    KeywordConstant,
    Operator,
    OperatorWord,
    Punctuation,
    IdentifierVariable,
    IdentifierFunction,
    IdentifierClass,
    IdentifierNamespace,
    BuiltinFunction,
    /// `ВызватьИсключение` / `Raise`
    ExceptionName,
    /// Key of a `key = 'value'` locale pair
    Attribute,
    Decorator,
    Label,
    String,
    StringEscape,
    StringInterpolation,
    CommentLine,
    CommentPreproc,
    /// Structured tags inside documentation comments
    CommentSpecial,
    Number,
    DateLiteral,
    Error,
}

impl TokenKind {
    /// Dotted Pygments token type name
    pub fn pygments_name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordDeclaration => "Keyword.Declaration",
            TokenKind::KeywordConstant => "Keyword.Constant",
            TokenKind::Operator => "Operator",
            TokenKind::OperatorWord => "Operator.Word",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::IdentifierVariable => "Name.Variable",
            TokenKind::IdentifierFunction => "Name.Function",
            TokenKind::IdentifierClass => "Name.Class",
            TokenKind::IdentifierNamespace => "Name.Namespace",
            TokenKind::BuiltinFunction => "Name.Builtin",
            TokenKind::ExceptionName => "Name.Exception",
            TokenKind::Attribute => "Name.Attribute",
            TokenKind::Decorator => "Name.Decorator",
            TokenKind::Label => "Name.Label",
            TokenKind::String => "String",
            TokenKind::StringEscape => "String.Escape",
            TokenKind::StringInterpolation => "String.Interpol",
            TokenKind::CommentLine => "Comment.Single",
            TokenKind::CommentPreproc => "Comment.Preproc",
            TokenKind::CommentSpecial => "Comment.Special",
            TokenKind::Number => "Number",
            TokenKind::DateLiteral => "Literal.Date",
            TokenKind::Error => "Error",
        }
    }

    /// Short CSS class used by HTML formatters
    pub fn short_name(self) -> &'static str {
        match self {
            TokenKind::Text => "",
            TokenKind::Keyword => "k",
            TokenKind::KeywordDeclaration => "kd",
            TokenKind::KeywordConstant => "kc",
            TokenKind::Operator => "o",
            TokenKind::OperatorWord => "ow",
            TokenKind::Punctuation => "p",
            TokenKind::IdentifierVariable => "nv",
            TokenKind::IdentifierFunction => "nf",
            TokenKind::IdentifierClass => "nc",
            TokenKind::IdentifierNamespace => "nn",
            TokenKind::BuiltinFunction => "nb",
            TokenKind::ExceptionName => "ne",
            TokenKind::Attribute => "na",
            TokenKind::Decorator => "nd",
            TokenKind::Label => "nl",
            TokenKind::String => "s",
            TokenKind::StringEscape => "se",
            TokenKind::StringInterpolation => "si",
            TokenKind::CommentLine => "c1",
            TokenKind::CommentPreproc => "cp",
            TokenKind::CommentSpecial => "cs",
            TokenKind::Number => "m",
            TokenKind::DateLiteral => "ld",
            TokenKind::Error => "err",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentLine | TokenKind::CommentPreproc | TokenKind::CommentSpecial
        )
    }

    pub fn is_string(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::StringEscape | TokenKind::StringInterpolation
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pygments_name())
    }
}

/// Token with byte offsets into the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind,
            start,
            end: start + text.len(),
            text,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whitespace-only `Text` token
    pub fn is_trivia(&self) -> bool {
        self.kind == TokenKind::Text && self.text.chars().all(char::is_whitespace)
    }

    pub fn position(&self, index: &LineIndex) -> Position {
        index.position(self.start)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}..{}", self.kind, self.text, self.start, self.end)
    }
}

/// Tokens without whitespace and empty spans
pub fn significant(tokens: &[Token]) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(|t| !t.is_empty() && !t.is_trivia())
}

/// Token statistics for analysis and reporting
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub builtins: usize,
    pub operators: usize,
    pub strings: usize,
    pub numbers: usize,
    pub comments: usize,
    pub errors: usize,
    pub other: usize,
}

impl TokenStats {
    pub fn collect(tokens: &[Token]) -> Self {
        let mut stats = TokenStats::default();

        for token in tokens {
            if token.is_trivia() {
                continue;
            }
            match token.kind {
                TokenKind::Keyword | TokenKind::KeywordDeclaration | TokenKind::KeywordConstant => {
                    stats.keywords += 1
                }
                TokenKind::IdentifierVariable
                | TokenKind::IdentifierFunction
                | TokenKind::IdentifierClass
                | TokenKind::IdentifierNamespace => stats.identifiers += 1,
                TokenKind::BuiltinFunction | TokenKind::ExceptionName => stats.builtins += 1,
                TokenKind::Operator | TokenKind::OperatorWord | TokenKind::Punctuation => {
                    stats.operators += 1
                }
                kind if kind.is_string() => stats.strings += 1,
                TokenKind::Number | TokenKind::DateLiteral => stats.numbers += 1,
                kind if kind.is_comment() => stats.comments += 1,
                TokenKind::Error => stats.errors += 1,
                _ => stats.other += 1,
            }
            stats.total += 1;
        }

        stats
    }
}

impl fmt::Display for TokenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Token Statistics:")?;
        writeln!(f, "  Total tokens: {}", self.total)?;
        writeln!(f, "  Keywords: {}", self.keywords)?;
        writeln!(f, "  Identifiers: {}", self.identifiers)?;
        writeln!(f, "  Builtins: {}", self.builtins)?;
        writeln!(f, "  Operators: {}", self.operators)?;
        writeln!(f, "  Strings: {}", self.strings)?;
        writeln!(f, "  Numbers: {}", self.numbers)?;
        writeln!(f, "  Comments: {}", self.comments)?;
        writeln!(f, "  Errors: {}", self.errors)?;
        writeln!(f, "  Other: {}", self.other)?;
        Ok(())
    }
}
