//! In-memory terminal
//!
//! Keeps the frame as a grid of chars, replays a scripted key queue and
//! records sleeps instead of sleeping. Drives the game without a tty.
//!
//! Only built for tests and with the `testing` feature. Once the script runs
//! out every poll reports `q`, so a scripted run always ends.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::Terminal;
use crate::sim::Key;

/// One poll's worth of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Key(Key),
    /// Polls report nothing until the next tick's sleep
    Idle,
}

#[derive(Debug, Clone)]
pub struct HeadlessTerminal {
    lines: u16,
    cols: u16,
    /// Frame contents by row
    back: Vec<Vec<char>>,
    /// Last flushed frame
    front: Vec<Vec<char>>,
    script: VecDeque<ScriptStep>,
    blocked: bool,
    pub sleeps: Vec<Duration>,
    pub flushes: usize,
}

impl HeadlessTerminal {
    pub fn new(lines: u16, cols: u16) -> Self {
        let blank = vec![vec![' '; cols as usize]; lines as usize];
        Self {
            lines,
            cols,
            back: blank.clone(),
            front: blank,
            script: VecDeque::new(),
            blocked: false,
            sleeps: Vec::new(),
            flushes: 0,
        }
    }

    /// Queue keys to be returned by subsequent polls within one tick
    pub fn press(&mut self, keys: &[Key]) -> &mut Self {
        self.script.extend(keys.iter().copied().map(ScriptStep::Key));
        self
    }

    /// Make the polls report nothing for the next `ticks` ticks
    pub fn idle(&mut self, ticks: usize) -> &mut Self {
        self.script.extend(std::iter::repeat_n(ScriptStep::Idle, ticks));
        self
    }

    /// Number of ticks paced so far
    pub fn ticks_slept(&self) -> usize {
        self.sleeps.len()
    }

    /// Last flushed frame as one string per row
    pub fn screen(&self) -> Vec<String> {
        self.front.iter().map(|row| row.iter().collect()).collect()
    }

    /// Positions of `glyph` in the last flushed frame as `(row, col)`
    pub fn find(&self, glyph: char) -> Vec<(u16, u16)> {
        let mut found = Vec::new();
        for (row, cells) in self.front.iter().enumerate() {
            for (col, &c) in cells.iter().enumerate() {
                if c == glyph {
                    found.push((row as u16, col as u16));
                }
            }
        }
        found
    }

    pub fn script_finished(&self) -> bool {
        self.script.is_empty()
    }
}

impl Terminal for HeadlessTerminal {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        if self.blocked {
            return Ok(None);
        }
        match self.script.pop_front() {
            Some(ScriptStep::Key(key)) => Ok(Some(key)),
            Some(ScriptStep::Idle) => {
                self.blocked = true;
                Ok(None)
            }
            // An exhausted script quits so runs always terminate
            None => Ok(Some(Key::Char('q'))),
        }
    }

    fn draw_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()> {
        if row < self.lines && col < self.cols {
            self.back[row as usize][col as usize] = glyph;
        }
        Ok(())
    }

    fn clear_frame(&mut self) -> io::Result<()> {
        for row in &mut self.back {
            row.fill(' ');
        }
        Ok(())
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        self.front.clone_from(&self.back);
        self.flushes += 1;
        Ok(())
    }

    fn grid_size(&self) -> io::Result<(u16, u16)> {
        Ok((self.lines, self.cols))
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.blocked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replay() {
        let mut term = HeadlessTerminal::new(4, 4);
        term.press(&[Key::Char('w'), Key::Char('d')]).idle(1);

        assert_eq!(term.poll_key().unwrap(), Some(Key::Char('w')));
        assert_eq!(term.poll_key().unwrap(), Some(Key::Char('d')));
        assert_eq!(term.poll_key().unwrap(), None);
        // Still idle until the tick ends
        assert_eq!(term.poll_key().unwrap(), None);

        term.sleep(Duration::from_millis(25));
        assert!(term.script_finished());
        assert_eq!(term.poll_key().unwrap(), Some(Key::Char('q')));
    }

    #[test]
    fn test_frame_only_visible_after_flush() {
        let mut term = HeadlessTerminal::new(3, 5);
        term.draw_text(1, 1, "hey").unwrap();
        assert!(term.find('h').is_empty());

        term.flush_frame().unwrap();
        assert_eq!(term.screen()[1], " hey ");

        term.clear_frame().unwrap();
        term.flush_frame().unwrap();
        assert!(term.find('h').is_empty());
        assert_eq!(term.flushes, 2);
    }

    #[test]
    fn test_drawing_off_grid_is_clipped() {
        let mut term = HeadlessTerminal::new(2, 2);
        term.draw_text(1, 1, "xyz").unwrap();
        term.draw_glyph(5, 0, 'o').unwrap();
        term.flush_frame().unwrap();
        assert_eq!(term.screen(), vec!["  ".to_string(), " x".to_string()]);
    }
}
