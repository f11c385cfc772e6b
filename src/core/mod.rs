/*!
# Core Module

Ambient functionality shared by the lexer: host-level errors,
offset to line/column mapping and source file loading.
*/

pub mod errors;
pub mod fs_utils;
pub mod position;

pub use errors::{LexerError, Result};
pub use fs_utils::{read_bsl_file, strip_bom};
pub use position::{LineIndex, Position};
