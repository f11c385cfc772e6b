/*!
# Lexer modes

Таблицы правил всех режимов трёх диалектов. Корневые режимы:
`Root` (встроенный язык), `SdblRoot` (язык запросов) и `ConstraintRoot`
(ограничения доступа). Последние два также используются для разбора
фрагментов строковых литералов встроенного языка.
*/

use once_cell::sync::Lazy;

use super::engine::Mode;

mod bsl;
mod doc;
mod query;
mod strings;

/// Pattern of an identifier
pub(crate) const IDENT: &str = r"[_\p{L}][_\p{L}\p{N}]*";

/// Date literal shapes accepted in code
pub(crate) const DATE: &str = r"'(?:\d{14}|\d{8}|\d{4}[-./]\d{2}[-./]\d{2}(?:[T ]\d{2}:\d{2}(?::\d{2})?)?)'";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ModeId {
    Root,
    Params,
    DecoratorParams,
    PreprocIf,
    AfterAssign,
    DocComment,
    String,
    QueryString,
    ConstraintString,
    LocaleKey,
    LocaleOpen,
    LocaleValue,
    LocaleAfterValue,
    SdblRoot,
    SdblString,
    ConstraintRoot,
}

impl ModeId {
    /// In declaration order, so `ALL[id as usize] == id`
    const ALL: [ModeId; 16] = [
        ModeId::Root,
        ModeId::Params,
        ModeId::DecoratorParams,
        ModeId::PreprocIf,
        ModeId::AfterAssign,
        ModeId::DocComment,
        ModeId::String,
        ModeId::QueryString,
        ModeId::ConstraintString,
        ModeId::LocaleKey,
        ModeId::LocaleOpen,
        ModeId::LocaleValue,
        ModeId::LocaleAfterValue,
        ModeId::SdblRoot,
        ModeId::SdblString,
        ModeId::ConstraintRoot,
    ];
}

fn build(id: ModeId) -> Mode {
    match id {
        ModeId::Root => bsl::root(),
        ModeId::Params => bsl::params(),
        ModeId::DecoratorParams => bsl::decorator_params(),
        ModeId::PreprocIf => bsl::preproc_if(),
        ModeId::AfterAssign => bsl::after_assign(),
        ModeId::DocComment => doc::doc_comment(),
        ModeId::String => strings::plain(),
        ModeId::QueryString => strings::query(),
        ModeId::ConstraintString => strings::constraint(),
        ModeId::LocaleKey => strings::locale_key(),
        ModeId::LocaleOpen => strings::locale_open(),
        ModeId::LocaleValue => strings::locale_value(),
        ModeId::LocaleAfterValue => strings::locale_after_value(),
        ModeId::SdblRoot => query::sdbl_root(),
        ModeId::SdblString => query::sdbl_string(),
        ModeId::ConstraintRoot => query::constraint_root(),
    }
}

static MODES: Lazy<Vec<Mode>> = Lazy::new(|| ModeId::ALL.iter().map(|&id| build(id)).collect());

pub(crate) fn mode_table(id: ModeId) -> &'static Mode {
    &MODES[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table_is_indexed_by_id() {
        for id in ModeId::ALL {
            assert_eq!(mode_table(id).id, id);
            assert!(!mode_table(id).rules.is_empty());
        }
    }
}
