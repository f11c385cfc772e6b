//! Режимы кода встроенного языка

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{doc, strings, ModeId, DATE, IDENT};
use crate::keywords::bsl::EXTENSION_HOOKS;
use crate::lexer::classify;
use crate::lexer::engine::{Action, Fallback, Flow, Mode, Rule, Scan, Transition};
use crate::lexer::lookahead::{self, not_after_dot};
use crate::lexer::token::TokenKind;

use Action::{Call, Emit, Groups, Nothing};
use TokenKind::*;

pub(super) fn root() -> Mode {
    let rules = vec![
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(r"//[^\n]*", Call(comment)),
        Rule::new(r"#(?:ИначеЕсли|ElsIf|Если|If)\b", Emit(CommentPreproc))
            .then(Transition::Push(ModeId::PreprocIf)),
        Rule::new(r"#[^\n]*", Call(preproc_line)),
        Rule::new(&format!("&{IDENT}"), Call(decorator_line)),
        Rule::new(&format!(r"{IDENT}[^\S\n]*\("), Call(classify::constant_call)).when(not_after_dot),
        Rule::new(&format!(r"(Новый|New)([^\S\n]+)({IDENT})"), Call(classify::new_type))
            .when(not_after_dot),
        Rule::new(&format!(r"({IDENT})(\.)({IDENT})"), Call(classify::metadata_path))
            .when(not_after_dot),
        Rule::new(
            &format!(r"(Процедура|Procedure|Функция|Function)([^\S\n]+)({IDENT})([^\S\n]*)(\()"),
            Groups(&[Keyword, Text, IdentifierFunction, Text, Punctuation]),
        )
        .when(not_after_dot)
        .then(Transition::Push(ModeId::Params)),
        Rule::new(r"~[_\p{L}\p{N}]*", Emit(Label)),
        Rule::new("\"", Call(strings::open_string)),
        Rule::new(DATE, Emit(DateLiteral)),
        // Одинарные кавычки вне даты
        Rule::new(r"'[^'\n]*'?", Emit(Error)),
        Rule::new(r"\d+(?:\.\d*)?", Emit(Number)),
        Rule::new(r"<=|>=|<>", Emit(Operator)),
        Rule::new("=", Emit(Operator)).then(Transition::Push(ModeId::AfterAssign)),
        Rule::new(r"[<>+\-*/%.]", Emit(Operator)),
        Rule::new(r"[\[\]:(),;?]", Emit(Punctuation)),
        Rule::new(r"\|", Emit(Error)),
        Rule::new(IDENT, Call(classify::bsl_identifier)),
    ];
    Mode::new(ModeId::Root, rules)
}

/// Formal parameters of a procedure or function declaration
pub(super) fn params() -> Mode {
    let rules = vec![
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(r"//[^\n]*", Emit(CommentLine)),
        Rule::new(&format!("&{IDENT}"), Call(decorator_inline)),
        Rule::new(&format!(r"(=)([^\S\n]*)({IDENT})"), Call(classify::param_default)),
        Rule::new("=", Emit(Operator)),
        Rule::new(",", Emit(Punctuation)),
        Rule::new(r"\)", Emit(Punctuation)).then(Transition::Pop),
        Rule::new("\"", Call(strings::open_string)),
        Rule::new(DATE, Emit(DateLiteral)),
        Rule::new(r"\d+(?:\.\d*)?", Emit(Number)),
        Rule::new(r"[-+]", Emit(Operator)),
        Rule::new(IDENT, Call(classify::param_identifier)),
    ];
    Mode::new(ModeId::Params, rules)
}

/// Arguments of an annotation: `&Имя(Параметр = "Значение", …)`
pub(super) fn decorator_params() -> Mode {
    let rules = vec![
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(r"//[^\n]*", Emit(CommentLine)),
        Rule::new(r"\)", Emit(Punctuation)).then(Transition::Pop),
        Rule::new("[,=]", Emit(Operator)),
        Rule::new(r#""(?:[^"\n]|"")*""#, Emit(String)),
        Rule::new(r#""(?:[^"\n]|"")*"#, Emit(Error)),
        Rule::new(DATE, Emit(DateLiteral)),
        Rule::new(r"\d+(?:\.\d*)?", Emit(Number)),
        Rule::new("-", Emit(Operator)),
        Rule::new(&format!("&{IDENT}"), Call(decorator_inline)),
        Rule::new(IDENT, Call(classify::annotation_identifier)),
    ];
    Mode::new(ModeId::DecoratorParams, rules)
}

/// Condition of `#Если` / `#ИначеЕсли` up to the end of the line
pub(super) fn preproc_if() -> Mode {
    let rules = vec![
        Rule::new(r"\n", Emit(Text)).then(Transition::Pop),
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(r"//[^\n]*", Emit(CommentLine)),
        Rule::new(r"[()]", Emit(CommentPreproc)),
        Rule::new(IDENT, Call(classify::preproc_identifier)),
    ];
    Mode::new(ModeId::PreprocIf, rules).with_fallback(Fallback::Line)
}

/// Right after `=`: a string literal here replaces this mode
pub(super) fn after_assign() -> Mode {
    let rules = vec![
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new("\"", Call(strings::open_string_in_place)),
        Rule::new("", Nothing).then(Transition::Pop),
    ];
    Mode::new(ModeId::AfterAssign, rules)
}

fn comment(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let (start, end) = scan.matched(caps);
    if lookahead::line_head(scan.text, start) && doc::is_doc_marker(&scan.text[start..end]) {
        doc::emit_doc_line(scan, start, end);
        return Flow::Goto(end, Transition::Push(ModeId::DocComment));
    }
    scan.emit(start, end, CommentLine);
    Flow::Done(end)
}

/// `#Область Имя`, `#КонецЕсли`, `#Вставка`…: one token per line,
/// a trailing comment stays a comment
fn preproc_line(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let line = &text[start..end];
    let body_end = start + line.find("//").unwrap_or(line.len());
    let directive_end = start + text[start..body_end].trim_end().len();
    scan.emit(start, directive_end, CommentPreproc);
    scan.emit(directive_end, body_end, Text);
    scan.emit(body_end, end, CommentLine);
    Flow::Done(end)
}

static HOOK_ARGUMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A(\()([^\S\n]*)(")([^"\n]*)(")([^\S\n]*)(\))"#)
        .unwrap_or_else(|e| panic!("{e}"))
});

/// Annotation at statement level: without arguments it spans the line
fn decorator_line(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    decorator(scan, caps, true)
}

fn decorator_inline(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    decorator(scan, caps, false)
}

fn decorator(scan: &mut Scan<'_>, caps: &Captures<'_>, whole_line: bool) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);

    // &Перед("ИмяМетода"): имя перехватываемого метода
    if EXTENSION_HOOKS.contains(&text[start + 1..end]) {
        if let Some(hook) = HOOK_ARGUMENT.captures(&text[end..]) {
            scan.emit(start, end, Decorator);
            let kinds = [
                Punctuation,
                Text,
                String,
                IdentifierFunction,
                String,
                Text,
                Punctuation,
            ];
            for (index, kind) in kinds.into_iter().enumerate() {
                if let Some(m) = hook.get(index + 1) {
                    scan.emit(end + m.start(), end + m.end(), kind);
                }
            }
            let hook_end = end + hook.get(0).map_or(0, |m| m.end());
            return Flow::Done(hook_end);
        }
    }

    if text[end..].starts_with('(') {
        scan.emit(start, end, Decorator);
        scan.emit(end, end + 1, Punctuation);
        return Flow::Goto(end + 1, Transition::Push(ModeId::DecoratorParams));
    }
    if !whole_line {
        scan.emit(start, end, Decorator);
        return Flow::Done(end);
    }

    let eol = lookahead::line_end(text, end);
    let line = &text[start..eol];
    let body_end = start + line.find("//").unwrap_or(line.len());
    let stop = (start + text[start..body_end].trim_end().len()).max(end);
    scan.emit(start, stop, Decorator);
    Flow::Done(stop)
}
