//! Pattern text parsing
//!
//! A pattern describes one half (or quadrant) of a sprite as a compact
//! character grid: `@` marks a filled cell, `.` an empty cell, and `!`
//! terminates a row. Every other character is ignored, so patterns can be
//! laid out with spaces and newlines for readability.

use serde::{Deserialize, Serialize};

/// Filled-cell marker.
const FILL: char = '@';

/// Empty-cell marker.
const EMPTY: char = '.';

/// End-of-row marker.
const EOL: char = '!';

/// A parsed occupancy matrix.
///
/// `matrix[i][j]` is `true` for a filled cell at row `i`, column `j`.
/// `cols` is the longest row length, `rows` the number of terminated rows;
/// rows shorter than `cols` are legal and simply stop early.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pattern {
    pub matrix: Vec<Vec<bool>>,
    pub cols: usize,
    pub rows: usize,
}

/// Parse pattern text into a [`Pattern`].
///
/// Scans left to right, collecting `@`/`.` cells into the current row and
/// closing it on `!`. Content after the last `!` never becomes a row: an
/// unterminated trailing row is silently dropped. Unrecognized characters
/// are skipped. This function never fails; input with no recognized
/// characters yields an empty pattern.
///
/// # Examples
///
/// ```
/// use pixmirror::pattern::parse_pattern;
///
/// let pattern = parse_pattern(". @ .!  @ . @!");
/// assert_eq!(pattern.rows, 2);
/// assert_eq!(pattern.cols, 3);
/// assert_eq!(pattern.matrix[0], vec![false, true, false]);
/// assert_eq!(pattern.matrix[1], vec![true, false, true]);
/// ```
pub fn parse_pattern(text: &str) -> Pattern {
    let mut matrix = Vec::new();
    let mut cols = 0;
    let mut rows = 0;
    let mut row = Vec::new();

    for c in text.chars() {
        match c {
            FILL => row.push(true),
            EMPTY => row.push(false),
            EOL => {
                cols = cols.max(row.len());
                matrix.push(std::mem::take(&mut row));
                rows += 1;
            }
            _ => {}
        }
    }

    Pattern { matrix, cols, rows }
}
