//! Lexer registration metadata as seen by a highlighting host

use bsl_lexer::{tokenize, Dialect, LexerError, Token, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn test_lookup_by_name() {
    let bsl = Dialect::from_alias("bsl").unwrap();
    assert_eq!(bsl.info().name, "1C (BSL) Lexer");
    let sdbl: Dialect = "sdbl".parse().unwrap();
    assert_eq!(sdbl.info().name, "1C (SDBL) Lexer");
}

#[test]
fn test_guess_by_filename() {
    assert_eq!(Dialect::for_filename("ОбщийМодуль.bsl"), Some(Dialect::Bsl));
    assert_eq!(Dialect::for_filename("scripts/main.os"), Some(Dialect::Bsl));
    assert_eq!(Dialect::for_filename("samples.sdbl"), Some(Dialect::Sdbl));
    assert_eq!(Dialect::for_filename("samples.SDBL"), Some(Dialect::Sdbl));
    assert_eq!(Dialect::for_filename("README.md"), None);
}

#[test]
fn test_unknown_name_is_an_error() {
    match Dialect::from_alias("1c") {
        Err(LexerError::UnknownDialect(name)) => assert_eq!(name, "1c"),
        other => panic!("expected UnknownDialect, got {other:?}"),
    }
}

#[test]
fn test_every_dialect_is_registered() {
    for dialect in Dialect::ALL {
        let info = dialect.info();
        assert!(!info.aliases.is_empty());
        assert!(!info.mimetypes.is_empty());
        for alias in info.aliases {
            assert_eq!(Dialect::from_alias(alias).unwrap(), dialect);
        }
        for pattern in info.filenames {
            let name = pattern.replace('*', "module");
            assert_eq!(Dialect::for_filename(&name), Some(dialect));
        }
    }
}

#[test]
fn test_dialect_and_tokens_serialize() {
    assert_eq!(serde_json::to_string(&Dialect::Sdbl).unwrap(), "\"sdbl\"");
    let dialect: Dialect = serde_json::from_str("\"bsl\"").unwrap();
    assert_eq!(dialect, Dialect::Bsl);

    let tokens = tokenize("Перем А;", Dialect::Bsl);
    let json = serde_json::to_value(&tokens[0]).unwrap();
    assert_eq!(json["kind"], "keyword-declaration");
    assert_eq!(json["text"], "Перем");
    let back: Token = serde_json::from_value(json).unwrap();
    assert_eq!(back, tokens[0]);
    assert_eq!(back.kind, TokenKind::KeywordDeclaration);
}
