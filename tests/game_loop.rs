use bouncy_ball::platform::HeadlessTerminal;
use bouncy_ball::sim::{Ball, Key, Phase, Signal, SimulationConfig, advance_tick};
use bouncy_ball::Game;
use glam::Vec2;

/// Enough ticks for the default spawn to settle on a 24x80 grid
const SETTLE_TICKS: usize = 200;

fn headless(lines: u16, cols: u16) -> HeadlessTerminal {
    HeadlessTerminal::new(lines, cols)
}

#[test]
fn test_quit_mid_flight_keeps_ball_state() {
    let mut term = headless(24, 80);
    term.idle(3).press(&[Key::Char('q')]);
    let mut game = Game::new(term).unwrap();
    game.run().unwrap();

    // Same as three bare integrator ticks from the spawn point
    let config = SimulationConfig::from_grid(24, 80);
    let mut expected = Ball::new(&config);
    for _ in 0..3 {
        advance_tick(&mut expected, &config);
    }

    assert_eq!(game.time_ticks(), 3);
    assert_eq!(game.phase(), Some(Phase::Airborne));
    assert_eq!(game.ball(), &expected);
    assert!(!game.ball().is_at_rest());
}

#[test]
fn test_spawn_settles_and_shows_instructions() {
    let mut term = headless(24, 80);
    term.idle(SETTLE_TICKS);
    let mut game = Game::new(term).unwrap();
    game.run().unwrap();

    assert_eq!(game.phase(), Some(Phase::AtRest));
    assert!(game.ball().is_at_rest());
    assert_eq!(game.terminal().ticks_slept(), SETTLE_TICKS);

    let screen = game.terminal().screen();
    assert!(screen.iter().any(|row| row.contains("Q: Quit")));
}

#[test]
fn test_frames_track_ball() {
    let mut term = headless(24, 80);
    term.idle(SETTLE_TICKS);
    let mut game = Game::new(term).unwrap();

    let mut previous_phase = None;
    for _ in 0..SETTLE_TICKS {
        let ball_before = game.ball().clone();
        assert_eq!(game.step().unwrap(), Signal::Continue);
        let phase = game.phase().unwrap();
        if phase == Phase::AtRest {
            break;
        }
        assert_ne!(ball_before, *game.ball());

        // One glyph per frame, inside the grid
        let cells = game.terminal().find('o');
        assert_eq!(cells.len(), 1, "frame: {:?}", game.terminal().screen());
        previous_phase = Some(phase);
    }
    assert_eq!(previous_phase, Some(Phase::Rolling));
    assert_eq!(game.phase(), Some(Phase::AtRest));
}

#[test]
fn test_impulse_wakes_resting_ball() {
    let mut term = headless(24, 80);
    term.idle(1).press(&[Key::Char('w'), Key::Char('d')]).idle(1);
    let mut game = Game::new(term).unwrap();
    *game.ball_mut() = Ball {
        pos: Vec2::new(40.0, 0.0),
        vel: Vec2::ZERO,
    };

    assert_eq!(game.step().unwrap(), Signal::Continue);
    assert_eq!(game.phase(), Some(Phase::AtRest));

    assert_eq!(game.step().unwrap(), Signal::Continue);
    assert_eq!(game.phase(), Some(Phase::Airborne));
    let ball = game.ball();
    assert!((ball.pos.y - 4.0).abs() < 1e-5);
    assert!((ball.pos.x - 44.0).abs() < 1e-5);

    // Script exhausted: next poll quits
    assert_eq!(game.step().unwrap(), Signal::Quit);
}

#[test]
fn test_invariants_hold_under_random_play() {
    let config = SimulationConfig::from_grid(20, 40);
    let keys = [
        Key::Char('w'),
        Key::Char('a'),
        Key::Char('s'),
        Key::Char('d'),
        Key::ArrowUp,
        Key::ArrowRight,
    ];

    let mut term = headless(20, 40);
    for i in 0..400 {
        if i % 7 == 0 {
            term.press(&[keys[i % keys.len()]]);
        }
        term.idle(1);
    }
    let mut game = Game::new(term).unwrap();

    while game.step().unwrap() == Signal::Continue {
        let ball = game.ball();
        assert!(ball.pos.x >= 0.0 && ball.pos.x <= config.cols as f32, "{:?}", ball);
        assert!(ball.pos.y >= 0.0, "{:?}", ball);
    }
    assert!(game.terminal().script_finished());
}
