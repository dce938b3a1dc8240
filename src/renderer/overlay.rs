//! Key bindings legend

use std::io;

use crate::platform::Terminal;

const LEGEND: [&str; 5] = [
    "W: Fire upwards",
    "S: Fire downwards",
    "A: Fire left",
    "D: Fire right",
    "Q: Quit",
];

/// Top-left corner of the box
const BOX_ROW: u16 = 3;
const BOX_COL: u16 = 1;
const BOX_WIDTH: u16 = 21;
const BOX_HEIGHT: u16 = LEGEND.len() as u16 + 2;

/// Draw the bordered legend on top of the current frame and flush it
///
/// Parts that fall outside the grid are clipped by the terminal.
pub fn show_instructions<T: Terminal>(terminal: &mut T) -> io::Result<()> {
    let top = BOX_ROW;
    let bottom = BOX_ROW + BOX_HEIGHT - 1;
    let left = BOX_COL;
    let right = BOX_COL + BOX_WIDTH - 1;

    for col in left + 1..right {
        terminal.draw_glyph(top, col, '─')?;
        terminal.draw_glyph(bottom, col, '─')?;
    }
    for row in top + 1..bottom {
        terminal.draw_glyph(row, left, '│')?;
        terminal.draw_glyph(row, right, '│')?;
        for col in left + 1..right {
            terminal.draw_glyph(row, col, ' ')?;
        }
    }
    terminal.draw_glyph(top, left, '┌')?;
    terminal.draw_glyph(top, right, '┐')?;
    terminal.draw_glyph(bottom, left, '└')?;
    terminal.draw_glyph(bottom, right, '┘')?;

    for (row, text) in (top + 1..).zip(LEGEND) {
        terminal.draw_text(row, left + 2, text)?;
    }

    terminal.flush_frame()
}
