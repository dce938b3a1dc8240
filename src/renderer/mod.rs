//! Character-grid rendering
//!
//! Each frame is the ball glyph on an otherwise blank screen. Rendering also
//! owns the tick sleep that paces the whole simulation.

pub mod overlay;

pub use overlay::show_instructions;

use std::io;

use crate::consts::BALL_GLYPH;
use crate::platform::Terminal;
use crate::sim::{Ball, SimulationConfig};

/// Screen cell for the ball as `(row, col)`
///
/// Physics `y` grows upward from the floor while rows grow downward, so the
/// row is `lines - y`. Fractions are truncated and the result is clamped to
/// the visible grid (a ball resting on the floor sits on the bottom row).
pub fn grid_cell(ball: &Ball, config: &SimulationConfig) -> (u16, u16) {
    let max_row = config.lines.saturating_sub(1) as f32;
    let max_col = config.cols.saturating_sub(1) as f32;
    let row = (config.lines as f32 - ball.pos.y).clamp(0.0, max_row);
    let col = ball.pos.x.clamp(0.0, max_col);
    (row as u16, col as u16)
}

/// Redraw the ball and sleep one tick
///
/// The sleep is a fixed interval regardless of how long drawing took.
pub fn render_and_pace<T: Terminal>(
    terminal: &mut T,
    ball: &Ball,
    config: &SimulationConfig,
) -> io::Result<()> {
    let (row, col) = grid_cell(ball, config);
    terminal.clear_frame()?;
    terminal.draw_glyph(row, col, BALL_GLYPH)?;
    terminal.flush_frame()?;
    terminal.sleep(config.tick_interval);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessTerminal;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_grid_cell_inverts_height() {
        let config = SimulationConfig::from_grid(24, 80);
        assert_eq!(grid_cell(&ball_at(5.0, 24.0), &config), (0, 5));
        assert_eq!(grid_cell(&ball_at(5.7, 10.0), &config), (14, 5));
        assert_eq!(grid_cell(&ball_at(12.0, 2.5), &config), (21, 12));
    }

    #[test]
    fn test_grid_cell_clamps_to_screen() {
        let config = SimulationConfig::from_grid(24, 80);
        // On the floor and pinned to the right wall
        assert_eq!(grid_cell(&ball_at(80.0, 0.0), &config), (23, 79));
        // Fired above the top of the screen
        assert_eq!(grid_cell(&ball_at(0.0, 40.0), &config), (0, 0));
    }

    #[test]
    fn test_render_and_pace() {
        let config = SimulationConfig::from_grid(10, 20);
        let mut term = HeadlessTerminal::new(10, 20);

        render_and_pace(&mut term, &ball_at(3.0, 4.0), &config).unwrap();
        assert_eq!(term.find('o'), vec![(6, 3)]);
        assert_eq!(term.sleeps, vec![config.tick_interval]);

        // Previous frame is cleared
        render_and_pace(&mut term, &ball_at(4.0, 4.0), &config).unwrap();
        assert_eq!(term.find('o'), vec![(6, 4)]);
        assert_eq!(term.ticks_slept(), 2);
    }

    #[test]
    fn test_render_does_not_touch_ball() {
        let config = SimulationConfig::from_grid(10, 20);
        let mut term = HeadlessTerminal::new(10, 20);
        let ball = Ball {
            pos: Vec2::new(3.0, 4.0),
            vel: Vec2::new(1.0, -2.0),
        };
        let before = ball.clone();
        render_and_pace(&mut term, &ball, &config).unwrap();
        assert_eq!(ball, before);
    }
}
