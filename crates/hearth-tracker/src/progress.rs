//! Completion percentage and the fixed-width glyph progress bar.

pub const DEFAULT_BAR_LENGTH: usize = 10;

const FILLED: char = '▓';
const EMPTY: char = '░';

/// `done / total * 100`, truncated; 0 when there is nothing to do.
pub fn percentage(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done * 100 / total) as u32
}

/// `floor(percentage / 100 * length)` filled glyphs, the rest empty.
///
/// Percentages above 100 render as a full bar.
pub fn progress_bar(percentage: u32, length: usize) -> String {
    let filled = (percentage.min(100) as usize * length) / 100;
    let mut bar = String::with_capacity(length * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(length - filled));
    bar
}
