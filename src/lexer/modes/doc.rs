//! Документирующие комментарии методов.
//!
//! Блок начинается строкой-маркером (`// Параметры:`, `// Устарела.` …) и
//! продолжается, пока следующие строки тоже комментарии. Каждая строка
//! разбирается независимо.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::ModeId;
use crate::lexer::engine::{Action, Flow, Mode, Rule, Scan, Transition};
use crate::lexer::token::TokenKind::{self, *};

pub(super) fn doc_comment() -> Mode {
    let rules = vec![
        Rule::new(r"\n", Action::Emit(Text)),
        Rule::new(r"[^\S\n]+", Action::Emit(Text)),
        Rule::new(r"//[^\n]*", Action::Call(doc_line)),
        Rule::new("", Action::Nothing).then(Transition::Pop),
    ];
    Mode::new(ModeId::DocComment, rules)
}

struct Shape {
    pattern: Regex,
    kinds: &'static [TokenKind],
    marker: bool,
}

impl Shape {
    fn new(pattern: &str, kinds: &'static [TokenKind], marker: bool) -> Self {
        let pattern = RegexBuilder::new(&format!(r"\A{pattern}"))
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("invalid doc comment pattern: {e}"));
        Self { pattern, kinds, marker }
    }
}

const NAME: &str = r"[_\p{L}][_\p{L}\p{N}]*";

static SHAPES: Lazy<Vec<Shape>> = Lazy::new(|| {
    let type_list = format!(r"{NAME}(?:\.{NAME})*(?:[^\S\n]*,[^\S\n]*{NAME}(?:\.{NAME})*)*");
    vec![
        Shape::new(
            r"(//[^\S\n]*)((?:Параметры|Parameters|Возвращаемое[^\S\n]+значение|Returns|Return[^\S\n]+value|Примеры|Пример|Examples|Example|Варианты[^\S\n]+вызова|Call[^\S\n]+options):)(.*)",
            &[CommentLine, CommentSpecial, CommentLine],
            true,
        ),
        Shape::new(
            r"(//[^\S\n]*)((?:Устарела|Deprecated)(?:\.|\b))(.*)",
            &[CommentLine, CommentSpecial, CommentLine],
            true,
        ),
        Shape::new(
            r"(//[^\S\n]*)(См\.|See\b)([^\S\n]+)([_\p{L}][_\p{L}\p{N}.]*)(.*)",
            &[CommentLine, CommentSpecial, Text, IdentifierFunction, CommentLine],
            false,
        ),
        // * Имя - Тип, Тип - описание
        Shape::new(
            &format!(r"(//[^\S\n]*)(\*+)?([^\S\n]*)({NAME})([^\S\n]+)(-)([^\S\n]+)({type_list})(.*)"),
            &[
                CommentLine,
                Punctuation,
                Text,
                IdentifierVariable,
                Text,
                Punctuation,
                Text,
                IdentifierClass,
                CommentLine,
            ],
            false,
        ),
    ]
});

/// A line comment that opens a documentation block
pub(super) fn is_doc_marker(line: &str) -> bool {
    SHAPES
        .iter()
        .filter(|shape| shape.marker)
        .any(|shape| shape.pattern.is_match(line))
}

/// Emits one comment line `scan.text[start..end]` split by its shape
pub(super) fn emit_doc_line(scan: &mut Scan<'_>, start: usize, end: usize) {
    let line = &scan.text[start..end];
    for shape in SHAPES.iter() {
        if let Some(caps) = shape.pattern.captures(line) {
            for (index, kind) in shape.kinds.iter().enumerate() {
                if let Some(m) = caps.get(index + 1) {
                    scan.emit(start + m.start(), start + m.end(), *kind);
                }
            }
            return;
        }
    }
    scan.emit(start, end, CommentLine);
}

fn doc_line(scan: &mut Scan<'_>, caps: &regex::Captures<'_>) -> Flow {
    let (start, end) = scan.matched(caps);
    emit_doc_line(scan, start, end);
    Flow::Done(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::engine::Tokens;

    fn doc_tokens(text: &str) -> Vec<(TokenKind, std::string::String)> {
        Tokens::new(text, ModeId::Root)
            .filter(|t| !t.is_trivia())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_markers() {
        assert!(is_doc_marker("// Параметры:"));
        assert!(is_doc_marker("//Returns:"));
        assert!(is_doc_marker("// Устарела. Следует использовать Новая()"));
        assert!(!is_doc_marker("// обычный комментарий"));
        assert!(!is_doc_marker("// Параметры запроса заполняются ниже"));
    }

    #[test]
    fn test_parameter_section() {
        let tokens = doc_tokens("// Параметры:\n//   Имя - Строка - имя объекта\nФункция");
        assert_eq!(
            tokens,
            vec![
                (CommentLine, "// ".into()),
                (CommentSpecial, "Параметры:".into()),
                (CommentLine, "//   ".into()),
                (IdentifierVariable, "Имя".into()),
                (Punctuation, "-".into()),
                (IdentifierClass, "Строка".into()),
                (CommentLine, " - имя объекта".into()),
                (Keyword, "Функция".into()),
            ]
        );
    }

    #[test]
    fn test_see_reference_and_plain_lines() {
        let tokens = doc_tokens("// Устарела.\n// См. ОбщийМодуль.Метод\n// просто текст");
        assert_eq!(
            tokens,
            vec![
                (CommentLine, "// ".into()),
                (CommentSpecial, "Устарела.".into()),
                (CommentLine, "// ".into()),
                (CommentSpecial, "См.".into()),
                (IdentifierFunction, "ОбщийМодуль.Метод".into()),
                (CommentLine, "// просто текст".into()),
            ]
        );
    }

    #[test]
    fn test_marker_needs_line_head() {
        let tokens = doc_tokens("А = 1; // Параметры:");
        assert_eq!(tokens.last(), Some(&(CommentLine, "// Параметры:".into())));
    }
}
