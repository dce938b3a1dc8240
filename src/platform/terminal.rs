//! crossterm backend
//!
//! Acquiring the terminal switches it to raw mode on the alternate screen
//! with the cursor hidden. Dropping it puts everything back, including while
//! unwinding from a panic.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::Terminal;
use crate::sim::Key;

pub struct CrosstermTerminal {
    out: Stdout,
    /// Grid size when the terminal was acquired, as `(lines, cols)`
    size: (u16, u16),
}

impl CrosstermTerminal {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        let (cols, lines) = terminal::size()?;
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::info!("Terminal acquired");
        Ok(Self {
            out,
            size: (lines, cols),
        })
    }

    fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.out, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => log::info!("Terminal restored"),
            Err(e) => log::warn!("Failed to restore terminal: {}", e),
        }
    }
}

/// Translate a crossterm key event; releases and unmapped keys yield `None`
pub fn map_key_event(event: &KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Interrupt)
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

impl Terminal for CrosstermTerminal {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        // Skip mouse, resize and focus events until a key shows up
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = map_key_event(&key_event) {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }

    fn draw_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()> {
        let (lines, cols) = self.size;
        if row >= lines || col >= cols {
            return Ok(());
        }
        queue!(self.out, cursor::MoveTo(col, row), Print(glyph))
    }

    fn clear_frame(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn grid_size(&self) -> io::Result<(u16, u16)> {
        let (cols, lines) = terminal::size()?;
        Ok((lines, cols))
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
