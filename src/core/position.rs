/*!
# Source position types (Position, LineIndex)

Токены несут байтовые смещения; редакторам нужны строка и колонка.
`LineIndex` строится один раз на текст и отвечает на запросы бинарным поиском.
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Position in source code (1-based line and column, column in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line index for fast offset->(line,column) mapping.
#[derive(Debug, Clone)]
pub struct LineIndex {
    text: Arc<str>,
    /// Byte offsets where each line starts.
    line_starts: Arc<Vec<usize>>, // Arc для дешёвого клонирования
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = Vec::with_capacity(text.len() / 32 + 1);
        starts.push(0);
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        Self {
            text: Arc::from(text),
            line_starts: Arc::new(starts),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Offsets past the end clamp to the end of text.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        // Последний line_start <= offset
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        Position::new(line + 1, column + 1, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_basic() {
        let text = "line1\nline2\nlast";
        let idx = LineIndex::new(text);
        assert_eq!(idx.line_count(), 3);
        let p = idx.position(7); // 'i' in line2
        assert_eq!(p.line, 2);
        assert_eq!(p.column, 2);
    }

    #[test]
    fn test_columns_count_characters() {
        let text = "А = 1;\nБ = 2;";
        let idx = LineIndex::new(text);
        // 'Б' начинается после "А = 1;\n" (А занимает 2 байта)
        let p = idx.position(8);
        assert_eq!((p.line, p.column), (2, 1));
        let p = idx.position(2);
        assert_eq!((p.line, p.column), (1, 2));
    }

    #[test]
    fn test_offset_clamped() {
        let idx = LineIndex::new("ab");
        assert_eq!(idx.position(100).offset, 2);
    }
}
