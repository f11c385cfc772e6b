//! Context checks over the raw text.
//!
//! Движок регулярных выражений не поддерживает lookaround, поэтому
//! проверки вида «перед словом точка» или «дальше идёт `(`» сделаны
//! здесь явно. Все функции работают с байтовыми смещениями границ символов.

use once_cell::sync::Lazy;
use regex::Regex;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_inline_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Member access: the name is written right after a `.`
pub(crate) fn after_dot(text: &str, pos: usize) -> bool {
    text[..pos].ends_with('.')
}

pub(crate) fn not_after_dot(text: &str, pos: usize) -> bool {
    !after_dot(text, pos)
}

/// Only whitespace separates `pos` from the start of its line
pub(crate) fn line_head(text: &str, pos: usize) -> bool {
    let head = text[..pos].trim_end_matches(is_inline_space);
    head.is_empty() || head.ends_with('\n')
}

pub(crate) fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// Position of `(` when it follows `end` after optional inline whitespace
pub(crate) fn call_follows(text: &str, end: usize) -> Option<usize> {
    let rest = &text[end..];
    let skipped = rest.len() - rest.trim_start_matches(is_inline_space).len();
    rest[skipped..].starts_with('(').then_some(end + skipped)
}

/// Anything other than whitespace between `(` at `paren` and the next `)`
pub(crate) fn call_has_arguments(text: &str, paren: usize) -> bool {
    text[paren + 1..]
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c != ')')
}

/// End of the call opened at `open`: just past the matching `)`, or the
/// end of the line (trailing whitespace excluded) when it is not closed there.
pub(crate) fn call_end_on_line(text: &str, open: usize) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => break,
            b'"' => in_string = !in_string,
            b'(' if !in_string => depth += 1,
            b')' if !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    let line = &text[open..i];
    open + line.trim_end().len().max(1)
}

/// A closing quote (not a doubled one) before the end of the line
pub(crate) fn closes_on_line(text: &str, from: usize) -> bool {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() && bytes[i] != b'\n' {
        if bytes[i] == b'"' {
            if bytes.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            return true;
        }
        i += 1;
    }
    false
}

/// The next line that is neither blank nor a comment starts with `|`
pub(crate) fn continues_below(text: &str, from: usize) -> bool {
    let eol = line_end(text, from);
    if eol >= text.len() {
        return false;
    }
    for line in text[eol + 1..].split('\n') {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        return line.starts_with('|');
    }
    false
}

/// Offset of the quote closing a literal whose content starts at `body`
pub(crate) fn closing_quote(text: &str, body: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = body;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            if bytes.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Closing quote on the current line, else the line end
pub(crate) fn quote_or_line_end(text: &str, from: usize) -> usize {
    let eol = line_end(text, from);
    match closing_quote(&text[..eol], from) {
        Some(quote) => quote,
        None => eol,
    }
}

/// First word of a literal body, skipping whitespace, continuation
/// markers and comment lines
pub(crate) fn first_word(body: &str) -> Option<&str> {
    let mut rest = body;
    loop {
        rest = rest.trim_start();
        if let Some(tail) = rest.strip_prefix('|') {
            rest = tail;
            continue;
        }
        if rest.starts_with("//") {
            rest = rest.find('\n').map_or("", |i| &rest[i..]);
            continue;
        }
        break;
    }
    let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    (len > 0).then(|| &rest[..len])
}

/// Name of the call whose opening `(` directly precedes `pos`
pub(crate) fn enclosing_call_name(text: &str, pos: usize) -> Option<&str> {
    let head = text[..pos].trim_end().strip_suffix('(')?.trim_end();
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)?;
    Some(&head[start..])
}

static WORD_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[^\S\n]*([_\p{L}][_\p{L}\p{N}]*)").unwrap_or_else(|e| panic!("{e}"))
});

/// Identifier following `from` on the same line, after inline whitespace
pub(crate) fn word_after(text: &str, from: usize) -> Option<(usize, usize)> {
    WORD_AFTER
        .captures(&text[from..])
        .and_then(|caps| caps.get(1))
        .map(|m| (from + m.start(), from + m.end()))
}
