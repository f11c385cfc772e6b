//! Строковые литералы встроенного языка.
//!
//! При открытии литерала по его содержимому выбирается режим: обычная
//! строка, текст запроса, текст ограничения доступа или многоязычная
//! строка `ru = '…'; en = '…'`. Кавычки, удвоенные кавычки, переносы `|`
//! и строки-комментарии всегда разбирает внешний режим; остальное в
//! запросах и ограничениях отдаётся вложенному сканеру.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use super::ModeId;
use crate::keywords::bsl::{KEYWORDS, LOCALIZATION_CALLS};
use crate::keywords::query::{ACCESS_PREDICATES, CONSTRAINT_INTRODUCERS, QUERY_INTRODUCERS};
use crate::lexer::engine::{Action, Flow, Mode, Rule, Scan, Transition};
use crate::lexer::lookahead::{self, line_head};
use crate::lexer::token::TokenKind;

use Action::{Call, Emit};
use TokenKind::*;

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid literal pattern {pattern:?}: {e}"))
}

const LOCALE_CODE: &str = r"[a-z]{2,3}(?:_[a-z]{2,4})?";

static LOCALE_PAIR: Lazy<Regex> =
    Lazy::new(|| case_insensitive(&format!(r"\A[^\S\n]*{LOCALE_CODE}[^\S\n]*=[^\S\n]*'")));

static LOCALE_KEY: Lazy<Regex> =
    Lazy::new(|| case_insensitive(&format!(r"\A[^\S\n]*{LOCALE_CODE}[^\S\n]*=")));

static ACCESS_CALL: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<std::string::String> = ACCESS_PREDICATES.iter().map(|name| regex::escape(name)).collect();
    case_insensitive(&format!(
        r"(?:\A|[^_\p{{L}}\p{{N}}])(?:{})[^\S\n]*\(",
        names.join("|")
    ))
});

/// Mode for a literal whose content starts at `body`
fn literal_mode(text: &str, quote: usize, body: usize) -> ModeId {
    let close = lookahead::closing_quote(text, body).unwrap_or(text.len());
    let literal = &text[body..close];

    if let Some(word) = lookahead::first_word(literal) {
        if QUERY_INTRODUCERS.contains(word) {
            return ModeId::QueryString;
        }
        if CONSTRAINT_INTRODUCERS.contains(word) {
            return ModeId::ConstraintString;
        }
    }
    if ACCESS_CALL.is_match(literal) {
        return ModeId::ConstraintString;
    }
    if LOCALE_PAIR.is_match(literal) {
        return ModeId::LocaleKey;
    }
    let localized = lookahead::enclosing_call_name(text, quote)
        .is_some_and(|name| LOCALIZATION_CALLS.contains(name));
    if localized && LOCALE_KEY.is_match(literal) {
        return ModeId::LocaleKey;
    }
    ModeId::String
}

/// Neither this line nor a continuation line below closes the literal
fn unterminated(text: &str, from: usize) -> bool {
    !lookahead::closes_on_line(text, from) && !lookahead::continues_below(text, from)
}

/// Rest of the line becomes an error and the stack falls back to the root
fn abandon(scan: &mut Scan<'_>, from: usize) -> Flow {
    let eol = lookahead::line_end(scan.text, from);
    tracing::debug!(offset = from, "unterminated string literal");
    scan.emit(from, eol, Error);
    Flow::Goto(eol, Transition::Reset)
}

fn enter_string(scan: &mut Scan<'_>, caps: &Captures<'_>, in_place: bool) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    scan.emit(start, end, String);
    if unterminated(text, end) {
        return abandon(scan, end);
    }
    let mode = literal_mode(text, start, end);
    let transition = if in_place {
        Transition::Replace(mode)
    } else {
        Transition::Push(mode)
    };
    Flow::Goto(end, transition)
}

pub(super) fn open_string(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    enter_string(scan, caps, false)
}

/// Opening quote that replaces the current (lookahead) mode
pub(super) fn open_string_in_place(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    enter_string(scan, caps, true)
}

/// `"Текст" Мусор`: a name glued to a closed literal is an error,
/// unless it is a keyword (`Тогда`, `И`, …)
fn close_string(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    scan.emit(start, end, String);
    if let Some((word_start, word_end)) = lookahead::word_after(text, end) {
        if !KEYWORDS.contains(&text[word_start..word_end]) {
            tracing::debug!(offset = word_start, "stray token after string literal");
            scan.emit(end, word_start, Text);
            scan.emit(word_start, word_end, Error);
            return Flow::Goto(word_end, Transition::Pop);
        }
    }
    Flow::Goto(end, Transition::Pop)
}

/// Line-head `|` of a multi-line literal
fn continuation(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    scan.emit(start, end, String);
    if unterminated(text, end) {
        return abandon(scan, end);
    }
    Flow::Done(end)
}

/// Rules every literal mode starts with
fn edges() -> Vec<Rule> {
    vec![
        Rule::new("\"\"", Emit(StringEscape)),
        Rule::new("\"", Call(close_string)),
        Rule::new(r"\n", Emit(Text)),
        Rule::new(r"[^\S\n]+", Emit(Text)).when(line_head),
        Rule::new(r"//[^\n]*", Emit(CommentLine)).when(line_head),
        Rule::new(r"\|", Call(continuation)).when(line_head),
    ]
}

fn placeholders() -> Vec<Rule> {
    vec![
        Rule::new(r"%\d", Emit(StringInterpolation)),
        Rule::new("%%", Emit(StringEscape)),
        Rule::new("%", Emit(Error)),
    ]
}

pub(super) fn plain() -> Mode {
    let mut rules = edges();
    rules.extend(placeholders());
    rules.push(Rule::new(r#"[^"\n%]+"#, Emit(String)));
    Mode::new(ModeId::String, rules)
}

fn delegate_sdbl(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let (start, end) = scan.matched(caps);
    scan.delegate(start, end, ModeId::SdblRoot);
    Flow::Done(end)
}

fn delegate_constraint(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let (start, end) = scan.matched(caps);
    scan.delegate(start, end, ModeId::ConstraintRoot);
    Flow::Done(end)
}

fn embedded(id: ModeId, delegate: fn(&mut Scan<'_>, &Captures<'_>) -> Flow) -> Mode {
    let mut rules = edges();
    // Комментарий кончается у закрывающей кавычки литерала
    rules.push(Rule::new(r#"//(?:[^"\n]|"")*"#, Emit(CommentLine)));
    rules.push(Rule::new(r#"(?:[^"\n/]|/[^"\n/])+"#, Call(delegate)));
    rules.push(Rule::new("/", Call(delegate)));
    Mode::new(id, rules)
}

/// Text of a query: segments between quotes go to the SDBL scanner
pub(super) fn query() -> Mode {
    embedded(ModeId::QueryString, delegate_sdbl)
}

pub(super) fn constraint() -> Mode {
    embedded(ModeId::ConstraintString, delegate_constraint)
}

/// `ru` in `ru = 'Текст'`
pub(super) fn locale_key() -> Mode {
    let mut rules = edges();
    rules.extend([
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new(";", Emit(Operator)),
        Rule::new(
            &format!(r"({LOCALE_CODE})([^\S\n]*)(=)"),
            Action::Groups(&[Attribute, Text, Operator]),
        )
        .then(Transition::Replace(ModeId::LocaleOpen)),
        Rule::new(r#"[^;"\n]+"#, Emit(Error)),
    ]);
    Mode::new(ModeId::LocaleKey, rules)
}

/// Between `=` and the opening `'` of a value
pub(super) fn locale_open() -> Mode {
    let mut rules = edges();
    rules.extend([
        Rule::new(r"[^\S\n]+", Emit(Text)),
        Rule::new("'", Emit(StringEscape)).then(Transition::Replace(ModeId::LocaleValue)),
        // Нет открывающей кавычки
        Rule::new(r#"[^;"\n]+"#, Emit(Error)).then(Transition::Replace(ModeId::LocaleKey)),
    ]);
    Mode::new(ModeId::LocaleOpen, rules)
}

pub(super) fn locale_value() -> Mode {
    let mut rules = edges();
    rules.push(Rule::new("'", Emit(StringEscape)).then(Transition::Replace(ModeId::LocaleAfterValue)));
    rules.extend(placeholders());
    rules.push(Rule::new(r#"[^'"\n%]+"#, Call(locale_value_text)));
    Mode::new(ModeId::LocaleValue, rules)
}

/// Value text; a value cut off by the closing `"` is an error
fn locale_value_text(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let kind = if text[end..].starts_with('"') && !text[end..].starts_with("\"\"") {
        Error
    } else {
        String
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

/// After the closing `'` of a value: `;` or the end of the literal
pub(super) fn locale_after_value() -> Mode {
    let mut rules = edges();
    rules.extend([
        Rule::new(r"([^\S\n]*)(;)", Action::Groups(&[Text, Operator]))
            .then(Transition::Replace(ModeId::LocaleKey)),
        Rule::new(r"[^\S\n]+", Call(after_value_space)),
        Rule::new("'", Call(extra_quote)),
        // Пропущена точка с запятой
        Rule::new(r#"[^;"\n]+"#, Emit(Error)).then(Transition::Replace(ModeId::LocaleKey)),
    ]);
    Mode::new(ModeId::LocaleAfterValue, rules)
}

fn after_value_space(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let rest = &text[end..];
    if !(rest.is_empty() || rest.starts_with('"') || rest.starts_with('\n')) {
        return Flow::Reject;
    }
    scan.emit(start, end, Text);
    Flow::Done(end)
}

/// `'Текст''`: from the extra quote to the end of the line or literal
fn extra_quote(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, _) = scan.matched(caps);
    let stop = lookahead::quote_or_line_end(text, start);
    tracing::debug!(offset = start, "extra quote in localized string");
    scan.emit(start, stop, Error);
    Flow::Goto(stop, Transition::Replace(ModeId::LocaleKey))
}
