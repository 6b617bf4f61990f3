//! Scoring module - classic line clear awards
//!
//! A single lock awards `LINE_SCORES[lines]`. There is no level multiplier and
//! no drop bonus.

use crate::types::LINE_SCORES;

/// Award for clearing `lines` rows with a single lock.
///
/// Counts above 4 cannot be produced by one tetromino; they are clamped to the
/// four-line award rather than indexing past the table.
pub fn line_clear_score(lines: usize) -> u32 {
    let idx = lines.min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx]
}
