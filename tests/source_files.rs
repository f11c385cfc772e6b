//! Reading module files from disk in the encodings configuration dumps use

use std::fs;

use bsl_lexer::{read_bsl_file, significant, tokenize_file, LineIndex, TokenKind};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const MODULE: &str = "Процедура Тест() Экспорт\n\tСообщить(\"Привет\");\nКонецПроцедуры\n";

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_utf8_with_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(MODULE.as_bytes());
    let path = write(&dir, "Module.bsl", &bytes);

    assert_eq!(read_bsl_file(&path).unwrap(), MODULE);
    let tokens = tokenize_file(&path).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].start, 0);
}

#[test]
fn test_utf16le_with_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in MODULE.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = write(&dir, "Module.bsl", &bytes);
    assert_eq!(read_bsl_file(&path).unwrap(), MODULE);
}

#[test]
fn test_windows_1251() {
    let dir = TempDir::new().unwrap();
    let (encoded, _, had_errors) = encoding_rs::WINDOWS_1251.encode(MODULE);
    assert!(!had_errors);
    let path = write(&dir, "Module.os", &encoded);
    assert_eq!(read_bsl_file(&path).unwrap(), MODULE);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = tokenize_file(dir.path().join("Нет.bsl")).unwrap_err();
    assert!(err.to_string().contains("Нет.bsl"));
}

#[test]
fn test_sdbl_file_and_positions() {
    let dir = TempDir::new().unwrap();
    let text = "ВЫБРАТЬ\n\tПоле\nИЗ\n\tТаблица";
    let path = write(&dir, "Запрос.sdbl", text.as_bytes());
    let tokens = tokenize_file(&path).unwrap();
    let index = LineIndex::new(text);

    let positions: Vec<(String, usize, usize)> = significant(&tokens)
        .map(|t| {
            let pos = t.position(&index);
            (t.text.clone(), pos.line, pos.column)
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            ("ВЫБРАТЬ".to_string(), 1, 1),
            ("Поле".to_string(), 2, 2),
            ("ИЗ".to_string(), 3, 1),
            ("Таблица".to_string(), 4, 2),
        ]
    );
}
