/*!
Dialects embedded in string literals and literal error recovery
*/

use bsl_lexer::{significant, tokenize, Dialect, TokenKind};
use pretty_assertions::assert_eq;

use TokenKind::*;

fn lex(text: &str) -> Vec<(TokenKind, std::string::String)> {
    let tokens = tokenize(text, Dialect::Bsl);
    significant(&tokens).map(|t| (t.kind, t.text.clone())).collect()
}

fn expect(pairs: &[(TokenKind, &str)]) -> Vec<(TokenKind, std::string::String)> {
    pairs.iter().map(|(kind, text)| (*kind, text.to_string())).collect()
}

#[test]
fn test_localized_string() {
    assert_eq!(
        lex("Т = НСтр(\"ru = 'Русский'; en = 'English'\");"),
        expect(&[
            (IdentifierVariable, "Т"),
            (Operator, "="),
            (BuiltinFunction, "НСтр"),
            (Punctuation, "("),
            (String, "\""),
            (Attribute, "ru"),
            (Operator, "="),
            (StringEscape, "'"),
            (String, "Русский"),
            (StringEscape, "'"),
            (Operator, ";"),
            (Attribute, "en"),
            (Operator, "="),
            (StringEscape, "'"),
            (String, "English"),
            (StringEscape, "'"),
            (String, "\""),
            (Punctuation, ")"),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_localized_string_missing_semicolon() {
    let tokens = tokenize("Т = НСтр(\"ru = 'Русский' en = 'English'\");", Dialect::Bsl);
    let errors: Vec<_> = tokens.iter().filter(|t| t.kind == Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, " en = 'English'");

    let value = tokens.iter().position(|t| t.text == "Русский").unwrap();
    assert_eq!(tokens[value].kind, String);
    assert_eq!(tokens[value + 1].kind, StringEscape);
}

#[test]
fn test_localized_string_extra_quote() {
    let tokens = lex("Т = НСтр(\"ru = 'Русский''; en = 'English'\");");
    let errors: Vec<_> = tokens.iter().filter(|(kind, _)| *kind == Error).collect();
    assert_eq!(errors, vec![&(Error, "'; en = 'English'".to_string())]);
    assert!(tokens.contains(&(String, "Русский".to_string())));
    assert_eq!(tokens[tokens.len() - 3], (String, "\"".to_string()));
}

#[test]
fn test_localized_string_without_lookup_call() {
    // Пара «код = 'значение'» распознаётся и без НСтр
    let tokens = lex("Заголовок = \"ru = 'Да'\";");
    assert!(tokens.contains(&(Attribute, "ru".to_string())));
    assert!(tokens.contains(&(String, "Да".to_string())));
}

#[test]
fn test_query_literal() {
    assert_eq!(
        lex("ТекстЗапроса = \"ВЫБРАТЬ Поле ИЗ Таблица\";"),
        expect(&[
            (IdentifierVariable, "ТекстЗапроса"),
            (Operator, "="),
            (String, "\""),
            (KeywordDeclaration, "ВЫБРАТЬ"),
            (IdentifierVariable, "Поле"),
            (KeywordDeclaration, "ИЗ"),
            (IdentifierVariable, "Таблица"),
            (String, "\""),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_multiline_query_literal() {
    let text = "ТекстЗапроса = \"ВЫБРАТЬ
    |   Т.Поле КАК Поле
    |// комментарий
    |ИЗ
    |   Справочник.Товары КАК Т
    |ГДЕ
    |   Т.Владелец = &Параметр\";";
    assert_eq!(
        lex(text),
        expect(&[
            (IdentifierVariable, "ТекстЗапроса"),
            (Operator, "="),
            (String, "\""),
            (KeywordDeclaration, "ВЫБРАТЬ"),
            (String, "|"),
            (IdentifierVariable, "Т"),
            (Operator, "."),
            (IdentifierVariable, "Поле"),
            (KeywordDeclaration, "КАК"),
            (IdentifierVariable, "Поле"),
            (String, "|"),
            (CommentLine, "// комментарий"),
            (String, "|"),
            (KeywordDeclaration, "ИЗ"),
            (String, "|"),
            (IdentifierClass, "Справочник"),
            (Operator, "."),
            (IdentifierVariable, "Товары"),
            (KeywordDeclaration, "КАК"),
            (IdentifierVariable, "Т"),
            (String, "|"),
            (KeywordDeclaration, "ГДЕ"),
            (String, "|"),
            (IdentifierVariable, "Т"),
            (Operator, "."),
            (IdentifierVariable, "Владелец"),
            (Operator, "="),
            (IdentifierVariable, "&Параметр"),
            (String, "\""),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_comment_inside_one_line_query() {
    assert_eq!(
        lex("Т = \"ВЫБРАТЬ 1 // к\";\nА = Истина;"),
        expect(&[
            (IdentifierVariable, "Т"),
            (Operator, "="),
            (String, "\""),
            (KeywordDeclaration, "ВЫБРАТЬ"),
            (Number, "1"),
            (CommentLine, "// к"),
            (String, "\""),
            (Punctuation, ";"),
            (IdentifierVariable, "А"),
            (Operator, "="),
            (KeywordConstant, "Истина"),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_comment_with_doubled_quotes_inside_query() {
    let tokens = lex("Т = \"ВЫБРАТЬ 1 ГДЕ П ПОДОБНО \"\"http://x\"\"\";\nА = Истина;");
    let comment = tokens.iter().position(|(kind, _)| *kind == CommentLine).unwrap();
    assert_eq!(tokens[comment], (CommentLine, "//x\"\"".to_string()));
    assert_eq!(tokens[comment + 1], (String, "\"".to_string()));
    assert_eq!(tokens[comment + 2], (Punctuation, ";".to_string()));
    assert_eq!(
        tokens[comment + 3..].to_vec(),
        expect(&[
            (IdentifierVariable, "А"),
            (Operator, "="),
            (KeywordConstant, "Истина"),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_comment_inside_one_line_constraint() {
    let tokens = lex("Ограничение = \"РазрешитьЧтение ГДЕ Истина // всё\";\nА = 1;");
    assert!(tokens.contains(&(CommentLine, "// всё".to_string())));
    assert_eq!(
        tokens[tokens.len() - 6..].to_vec(),
        expect(&[
            (String, "\""),
            (Punctuation, ";"),
            (IdentifierVariable, "А"),
            (Operator, "="),
            (Number, "1"),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_embedded_tokens_use_absolute_offsets() {
    let text = "А = 1;\nТекстЗапроса = \"ВЫБРАТЬ Поле\";";
    let tokens = tokenize(text, Dialect::Bsl);
    let select = tokens.iter().find(|t| t.text == "ВЫБРАТЬ").unwrap();
    assert_eq!(select.kind, KeywordDeclaration);
    assert_eq!(&text[select.start..select.end], "ВЫБРАТЬ");
    let joined: std::string::String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, text);
}

#[test]
fn test_constraint_literal() {
    assert_eq!(
        lex("Ограничение = \"РазрешитьЧтение ГДЕ ЗначениеРазрешено(Организация)\";"),
        expect(&[
            (IdentifierVariable, "Ограничение"),
            (Operator, "="),
            (String, "\""),
            (KeywordDeclaration, "РазрешитьЧтение"),
            (KeywordDeclaration, "ГДЕ"),
            (BuiltinFunction, "ЗначениеРазрешено"),
            (Punctuation, "("),
            (IdentifierVariable, "Организация"),
            (Punctuation, ")"),
            (String, "\""),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_constraint_detected_by_predicate_call() {
    let tokens = lex("Ограничение = \"Т ГДЕ ЭтоАвторизованныйПользователь(Т.Автор)\";");
    assert!(tokens.contains(&(BuiltinFunction, "ЭтоАвторизованныйПользователь".to_string())));
    assert!(tokens.contains(&(KeywordDeclaration, "ГДЕ".to_string())));
}

#[test]
fn test_unterminated_literal_recovers() {
    assert_eq!(
        lex("Строка = \"Пример\nКлюч = Истина;"),
        expect(&[
            (IdentifierVariable, "Строка"),
            (Operator, "="),
            (String, "\""),
            (Error, "Пример"),
            (IdentifierVariable, "Ключ"),
            (Operator, "="),
            (KeywordConstant, "Истина"),
            (Punctuation, ";"),
        ])
    );
}

#[test]
fn test_unterminated_literal_inside_call_recovers() {
    let tokens = lex("Сообщить(\"Текст\nЕсли А Тогда");
    assert_eq!(tokens[3], (Error, "Текст".to_string()));
    assert_eq!(tokens[4], (Keyword, "Если".to_string()));
    assert_eq!(tokens.last(), Some(&(Keyword, "Тогда".to_string())));
}

#[test]
fn test_name_glued_to_literal() {
    assert_eq!(
        lex("А = \"Б\" Мусор;"),
        expect(&[
            (IdentifierVariable, "А"),
            (Operator, "="),
            (String, "\""),
            (String, "Б"),
            (String, "\""),
            (Error, "Мусор"),
            (Punctuation, ";"),
        ])
    );
    // Ключевое слово после литерала допустимо
    assert_eq!(lex("Если А = \"Б\" Тогда")[5], (String, "\"".to_string()));
    assert_eq!(lex("Если А = \"Б\" Тогда")[6], (Keyword, "Тогда".to_string()));
}

#[test]
fn test_stray_bar_outside_literal() {
    assert_eq!(
        lex("А = 1 | 2;"),
        expect(&[
            (IdentifierVariable, "А"),
            (Operator, "="),
            (Number, "1"),
            (Error, "|"),
            (Number, "2"),
            (Punctuation, ";"),
        ])
    );
}
