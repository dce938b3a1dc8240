//! Platform abstraction layer
//!
//! The simulation only talks to the outside world through [`Terminal`]:
//! non-blocking key polls, a character grid to draw into, and a clock.

#[cfg(any(test, feature = "testing"))]
pub mod headless;
pub mod terminal;

#[cfg(any(test, feature = "testing"))]
pub use headless::HeadlessTerminal;
pub use terminal::CrosstermTerminal;

use std::io;
use std::time::Duration;

use crate::sim::Key;

/// Character-grid terminal surface
///
/// Rows grow downward from 0 at the top of the screen.
pub trait Terminal {
    /// Next buffered key, or `None` when nothing is waiting. Never blocks.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;

    /// Put `glyph` at `(row, col)`; cells outside the grid are skipped
    fn draw_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()>;

    fn clear_frame(&mut self) -> io::Result<()>;

    /// Push everything drawn since the last flush to the screen
    fn flush_frame(&mut self) -> io::Result<()>;

    /// Grid size as `(lines, cols)`
    fn grid_size(&self) -> io::Result<(u16, u16)>;

    fn sleep(&mut self, duration: Duration);

    /// Draw a string left to right starting at `(row, col)`
    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        for (i, glyph) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            self.draw_glyph(row, col.saturating_add(offset), glyph)?;
        }
        Ok(())
    }
}
