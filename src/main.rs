//! Bouncy Ball entry point
//!
//! Parses the command line, takes over the terminal and runs the game loop.
//! Log output goes to stderr; set `RUST_LOG` and redirect it to a file to
//! keep it off the game screen.

use anyhow::{Context, Result};
use clap::Parser;

use bouncy_ball::platform::CrosstermTerminal;
use bouncy_ball::{DiagnosticLog, Game, Settings};

fn main() -> Result<()> {
    env_logger::init();
    let settings = Settings::parse();
    log::info!("Bouncy Ball starting...");

    let terminal = CrosstermTerminal::new().context("failed to acquire the terminal")?;
    let mut game = Game::new(terminal).context("failed to query the terminal size")?;

    if settings.debug {
        let diagnostics = DiagnosticLog::create(&settings.log_path, game.config())
            .with_context(|| {
                format!(
                    "failed to open diagnostic log {}",
                    settings.log_path.display()
                )
            })?;
        game = game.with_diagnostics(diagnostics);
    }

    game.run().context("terminal I/O failed")?;

    let ball = game.ball();
    log::info!(
        "Ball left at ({:.2}, {:.2}) moving ({:.2}, {:.2})",
        ball.pos.x,
        ball.pos.y,
        ball.v_right(),
        ball.v_up()
    );
    Ok(())
}
