//! File system utility helpers (BOM-aware readers, encoding detection)
use std::path::Path;

use super::errors::{LexerError, Result};

/// Reads a BSL file with encoding detection and BOM handling.
/// Returns the content as UTF-8 string with BOM removed.
pub fn read_bsl_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| LexerError::io(path, e))?;
    Ok(strip_bom(&decode(&bytes)).to_string())
}

fn decode(bytes: &[u8]) -> String {
    match bytes {
        // UTF-16LE BOM: FF FE
        [0xFF, 0xFE, ..] => {
            let (decoded, _, had_errors) = encoding_rs::UTF_16LE.decode(bytes);
            if had_errors {
                tracing::warn!("Errors detected while decoding UTF-16LE file");
            }
            decoded.into_owned()
        }
        // UTF-16BE BOM: FE FF
        [0xFE, 0xFF, ..] => {
            let (decoded, _, had_errors) = encoding_rs::UTF_16BE.decode(bytes);
            if had_errors {
                tracing::warn!("Errors detected while decoding UTF-16BE file");
            }
            decoded.into_owned()
        }
        _ => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => {
                // Windows-1251 встречается в старых выгрузках конфигураций
                tracing::debug!("UTF-8 decoding failed, trying Windows-1251");
                let (decoded, _, had_errors) = encoding_rs::WINDOWS_1251.decode(bytes);
                if had_errors {
                    tracing::warn!("Errors detected while decoding Windows-1251 file");
                }
                decoded.into_owned()
            }
        },
    }
}

/// Removes a leading U+FEFF if present
pub fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{FEFF}').unwrap_or(input)
}
