#![cfg(feature = "std")]

use crate::config::BOARD_SIZE;
use std::fmt::Write;

/// Render a score matrix (indexed `[x][y]`) with the same column letters and
/// row numbers as the grid display.
pub fn format_score_board(scores: &[[usize; BOARD_SIZE]; BOARD_SIZE]) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        let ch = (b'A' + x as u8) as char;
        let _ = write!(out, " {:>4}", ch);
    }
    for y in 0..BOARD_SIZE {
        out.push('\n');
        let _ = write!(out, "{:2} ", y + 1);
        for col in scores.iter() {
            let _ = write!(out, " {:>4}", col[y]);
        }
    }
    out
}
