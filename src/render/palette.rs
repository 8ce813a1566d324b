//! Fixed display palette for author swatches and pie slices.

use console::Color;

/// Ordered palette assigned positionally to authors in descending
/// contribution order. Brightest colors first so the biggest contributors
/// stand out; index 0 is never the terminal background.
pub const PALETTE: [Color; 15] = [
    Color::Color256(15), // white
    Color::Color256(11), // bright yellow
    Color::Color256(13), // bright magenta
    Color::Color256(9),  // bright red
    Color::Color256(14), // bright cyan
    Color::Color256(10), // bright green
    Color::Color256(12), // bright blue
    Color::Color256(8),  // dark gray
    Color::Color256(7),  // light gray
    Color::Color256(3),  // olive
    Color::Color256(5),  // purple
    Color::Color256(1),  // maroon
    Color::Color256(6),  // teal
    Color::Color256(2),  // dark green
    Color::Color256(4),  // navy
];

/// Color for the author at `index` in descending-contribution rank. Wraps
/// around when there are more authors than palette entries.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
