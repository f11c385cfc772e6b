/*!
# Identifier disambiguation

Одно и то же слово в зависимости от контекста бывает ключевым словом,
встроенной функцией, классом или именем переменной. Порядок проверок
для встроенного языка:

1. исключение (`ВызватьИсключение`);
2. `Новый` в позиции вызова с аргументами;
3. приведения типов (`Строка`, `Число`, …) в позиции вызова, иначе переменная;
4. объявление (`Перем`);
5. литеральные константы;
6. ключевые слова;
7. встроенные функции;
8. классы и пространства имён;
9. прочее: функция при вызове, иначе переменная.

Имя после точки всегда член объекта: функция при вызове, иначе переменная.
*/

use regex::Captures;

use super::engine::{Flow, Scan};
use super::lookahead;
use super::token::TokenKind;
use crate::keywords::bsl::{
    CONSTANTS, CONSTRUCTIBLE_TYPES, METADATA_ROOTS, PARAM_MODIFIERS, PREPROC_SYMBOLS, PREPROC_WORDS,
};
use crate::keywords::query::{QueryWords, CONSTRAINT, SDBL};
use crate::keywords::{casefold, classify_word, WordClass};

/// Call position of the word ending at `end`: `Some(has_arguments)`
fn call_shape(text: &str, end: usize) -> Option<bool> {
    lookahead::call_follows(text, end).map(|paren| lookahead::call_has_arguments(text, paren))
}

fn member_kind(call: Option<bool>) -> TokenKind {
    if call.is_some() {
        TokenKind::IdentifierFunction
    } else {
        TokenKind::IdentifierVariable
    }
}

pub(crate) fn bsl_word_kind(word: &str, call: Option<bool>) -> TokenKind {
    match (classify_word(word), call) {
        (Some(WordClass::Exception), _) => TokenKind::ExceptionName,
        (Some(WordClass::Constructor), Some(true)) => TokenKind::BuiltinFunction,
        (Some(WordClass::CallOnly), Some(_)) => TokenKind::BuiltinFunction,
        (Some(WordClass::CallOnly), None) => TokenKind::IdentifierVariable,
        (Some(WordClass::Declaration), _) => TokenKind::KeywordDeclaration,
        (Some(WordClass::Constant), _) => TokenKind::KeywordConstant,
        (Some(WordClass::Constructor | WordClass::Keyword), _) => TokenKind::Keyword,
        (Some(WordClass::Builtin), _) => TokenKind::BuiltinFunction,
        (Some(WordClass::Class), _) => TokenKind::IdentifierClass,
        (None, call) => member_kind(call),
    }
}

pub(crate) fn bsl_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let call = call_shape(text, end);
    let kind = if lookahead::after_dot(text, start) {
        member_kind(call)
    } else {
        bsl_word_kind(&text[start..end], call)
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

/// `Неопределено(…)`, `Истина(…)`: a constant literal cannot be called,
/// the whole call expression is an error.
pub(crate) fn constant_call(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let matched = &text[start..end];
    let word_len = matched
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(matched.len());
    if !CONSTANTS.contains(&matched[..word_len]) {
        return Flow::Reject;
    }
    let call_end = lookahead::call_end_on_line(text, end - 1);
    tracing::debug!(offset = start, "constant literal used as a call");
    scan.emit(start, call_end, TokenKind::Error);
    Flow::Done(call_end)
}

/// `Новый ТаблицаЗначений`: keyword and type in one match
pub(crate) fn new_type(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let Some((type_start, type_end)) = scan.group(caps, 3) else {
        return Flow::Reject;
    };
    if !CONSTRUCTIBLE_TYPES.contains(&text[type_start..type_end]) {
        return Flow::Reject;
    }
    scan.emit_groups(
        caps,
        &[TokenKind::Keyword, TokenKind::Text, TokenKind::IdentifierClass],
    );
    Flow::Done(type_end)
}

/// `Справочники.Номенклатура.` : namespace, operator, class
pub(crate) fn metadata_path(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (Some((root_start, root_end)), (_, end)) = (scan.group(caps, 1), scan.matched(caps)) else {
        return Flow::Reject;
    };
    if !text[end..].starts_with('.') || !METADATA_ROOTS.contains(&text[root_start..root_end]) {
        return Flow::Reject;
    }
    scan.emit_groups(
        caps,
        &[
            TokenKind::IdentifierNamespace,
            TokenKind::Operator,
            TokenKind::IdentifierClass,
        ],
    );
    Flow::Done(end)
}

/// Default value of a parameter written as a name: only constants are legal
pub(crate) fn param_default(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (_, end) = scan.matched(caps);
    let Some((value_start, value_end)) = scan.group(caps, 3) else {
        return Flow::Reject;
    };
    let value = if CONSTANTS.contains(&text[value_start..value_end]) {
        TokenKind::KeywordConstant
    } else {
        TokenKind::Error
    };
    scan.emit_groups(caps, &[TokenKind::Operator, TokenKind::Text, value]);
    Flow::Done(end)
}

pub(crate) fn param_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let word = &text[start..end];
    let kind = if PARAM_MODIFIERS.contains(word) {
        TokenKind::Keyword
    } else if CONSTANTS.contains(word) {
        TokenKind::KeywordConstant
    } else {
        TokenKind::IdentifierVariable
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

/// Names inside annotation arguments
pub(crate) fn annotation_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let kind = if CONSTANTS.contains(&text[start..end]) {
        TokenKind::KeywordConstant
    } else {
        TokenKind::IdentifierVariable
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

/// Names in a `#Если` condition: connectives, platform symbols, or errors
pub(crate) fn preproc_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let folded = casefold(&text[start..end]);
    let kind = if PREPROC_WORDS.contains_folded(&folded) {
        TokenKind::CommentPreproc
    } else if PREPROC_SYMBOLS.contains_folded(&folded) {
        TokenKind::KeywordConstant
    } else {
        TokenKind::Error
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

pub(crate) fn query_word_kind(words: &QueryWords, word: &str, call: bool) -> TokenKind {
    let folded = casefold(word);
    if call && words.functions.contains_folded(&folded) {
        TokenKind::BuiltinFunction
    } else if words.constants.contains_folded(&folded) {
        TokenKind::KeywordConstant
    } else if words.declarations.contains_folded(&folded) {
        TokenKind::KeywordDeclaration
    } else if words.classes.contains_folded(&folded) {
        TokenKind::IdentifierClass
    } else {
        TokenKind::IdentifierVariable
    }
}

fn query_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>, words: &QueryWords) -> Flow {
    let text = scan.text;
    let (start, end) = scan.matched(caps);
    let kind = if lookahead::after_dot(text, start) {
        TokenKind::IdentifierVariable
    } else {
        let call = lookahead::call_follows(text, end).is_some();
        query_word_kind(words, &text[start..end], call)
    };
    scan.emit(start, end, kind);
    Flow::Done(end)
}

pub(crate) fn sdbl_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    query_identifier(scan, caps, &SDBL)
}

pub(crate) fn constraint_identifier(scan: &mut Scan<'_>, caps: &Captures<'_>) -> Flow {
    query_identifier(scan, caps, &CONSTRAINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_position_sensitivity() {
        assert_eq!(bsl_word_kind("Строка", Some(true)), TokenKind::BuiltinFunction);
        assert_eq!(bsl_word_kind("Строка", None), TokenKind::IdentifierVariable);
        assert_eq!(bsl_word_kind("Новый", Some(true)), TokenKind::BuiltinFunction);
        assert_eq!(bsl_word_kind("Новый", Some(false)), TokenKind::Keyword);
        assert_eq!(bsl_word_kind("Новый", None), TokenKind::Keyword);
        assert_eq!(bsl_word_kind("Мой", Some(false)), TokenKind::IdentifierFunction);
        assert_eq!(bsl_word_kind("Мой", None), TokenKind::IdentifierVariable);
    }

    #[test]
    fn test_exception_wins_in_any_position() {
        assert_eq!(bsl_word_kind("ВызватьИсключение", None), TokenKind::ExceptionName);
        assert_eq!(bsl_word_kind("raise", Some(true)), TokenKind::ExceptionName);
    }

    #[test]
    fn test_query_words() {
        assert_eq!(query_word_kind(&SDBL, "Выбрать", false), TokenKind::KeywordDeclaration);
        assert_eq!(query_word_kind(&SDBL, "СУММА", true), TokenKind::BuiltinFunction);
        assert_eq!(query_word_kind(&SDBL, "Сумма", false), TokenKind::IdentifierVariable);
        assert_eq!(query_word_kind(&SDBL, "LEFT", false), TokenKind::KeywordDeclaration);
        assert_eq!(query_word_kind(&SDBL, "Справочник", false), TokenKind::IdentifierClass);
        assert_eq!(
            query_word_kind(&CONSTRAINT, "ЗначениеРазрешено", true),
            TokenKind::BuiltinFunction
        );
    }
}
