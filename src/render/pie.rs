//! ASCII pie chart: angular bucketing of proportions over a rasterized disc.
//!
//! Rasterization is a pure function of (fractions, radius) so the geometry is
//! testable without a terminal; only [`draw`] touches cursor state.

use crate::render::palette::palette_color;
use anyhow::Result;
use console::{Style, Term};
use std::f64::consts::PI;

/// Two-character block cell; character cells are taller than wide, so doubled
/// glyphs keep the disc visually round.
const BLOCK: &str = "██";

/// Rotation of the slice zero-point. Purely cosmetic: it puts the first
/// slice's boundary near twelve o'clock instead of three.
const ANGLE_OFFSET: f64 = 0.45;

/// Radius used by the final report.
pub const DEFAULT_RADIUS: i32 = 11;

/// Columns from the right edge of the terminal to the chart origin.
const RIGHT_MARGIN: usize = 50;

/// Rasterize a disc of `radius` into palette indices.
///
/// Each cell of the bounding square is `Some(slice index)` when inside the
/// disc and claimed by a slice, `None` when outside or (for proportion
/// vectors summing below the consumed angle) fallen through to background.
/// Rows run top to bottom, cells left to right.
pub fn rasterize(fractions: &[f64], radius: i32) -> Vec<Vec<Option<usize>>> {
    let side = (2 * radius + 1) as usize;
    let mut rows = Vec::with_capacity(side);
    for dy in -radius..=radius {
        let mut row = Vec::with_capacity(side);
        for dx in -radius..=radius {
            if dx * dx + dy * dy < radius * radius {
                let angle = (dy as f64).atan2(dx as f64) / (2.0 * PI) + ANGLE_OFFSET;
                row.push(slice_index(fractions, angle));
            } else {
                row.push(None);
            }
        }
        rows.push(row);
    }
    rows
}

/// Walk the proportion vector, consuming `angle` slice by slice. Returns the
/// index of the slice the angle lands in, or `None` when the fractions are
/// exhausted first (sum < consumed angle); callers render that as background
/// rather than failing.
fn slice_index(fractions: &[f64], mut angle: f64) -> Option<usize> {
    for (index, share) in fractions.iter().enumerate() {
        if angle < *share {
            return Some(index);
        }
        angle -= share;
    }
    None
}

/// Draw the pie at the right-hand side of the terminal, starting `2 * radius`
/// rows above the current cursor row so it sits alongside the totals table.
/// Pure rendering side effect; the raster itself comes from [`rasterize`].
pub fn draw(term: &Term, fractions: &[f64], radius: i32) -> Result<()> {
    let raster = rasterize(fractions, radius);
    let (_, width) = term.size();
    let origin_col = (width as usize).saturating_sub(RIGHT_MARGIN);

    term.move_cursor_up((2 * radius) as usize)?;
    for row in &raster {
        let mut line = String::new();
        for cell in row {
            match cell {
                Some(index) => {
                    let color = palette_color(*index);
                    line.push_str(&Style::new().fg(color).bg(color).apply_to(BLOCK).to_string());
                }
                None => line.push_str("  "),
            }
        }
        term.move_cursor_right(origin_col)?;
        term.write_line(&line)?;
    }
    Ok(())
}
