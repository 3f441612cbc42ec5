//! Drives the host through key events, the way the binary does.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::term::{FrameBuffer, MenuItem, Viewport};
use tui_memory::types::{GridSize, Phase, Theme, SETTLE_DELAY_MS, TICK_MS};
use tui_memory::{App, AppConfig, Screen, TickClock};

fn press(app: &mut App, code: KeyCode) -> bool {
    let key = KeyEvent::from(code);
    assert!(!should_quit(key));
    match handle_key_event(key) {
        Some(cmd) => app.handle(cmd),
        None => false,
    }
}

fn app() -> App {
    App::new(&AppConfig {
        seed: Some(4242),
        log_path: None,
        ..AppConfig::default()
    })
}

fn wait_settle(app: &mut App) {
    for _ in 0..(SETTLE_DELAY_MS / TICK_MS + 1) {
        app.tick(TICK_MS);
    }
}

/// Move the cursor to `index` from wherever it is.
fn go_to(app: &mut App, index: usize) {
    let side = app.cursor().side() as usize;
    let (row, col) = (index / side, index % side);
    while (app.cursor().row() as usize) < row {
        press(app, KeyCode::Down);
    }
    while (app.cursor().row() as usize) > row {
        press(app, KeyCode::Up);
    }
    while (app.cursor().col() as usize) < col {
        press(app, KeyCode::Right);
    }
    while (app.cursor().col() as usize) > col {
        press(app, KeyCode::Left);
    }
    assert_eq!(app.cursor().index(), index);
}

#[test]
fn setup_then_play_a_full_game_with_keys() {
    let mut app = app();

    // Icons theme, 2 players, 6x6.
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.setup().theme, Theme::Icons);
    assert_eq!(app.setup().players.get(), 2);
    assert_eq!(app.setup().grid, GridSize::Six);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Playing);

    let board = app.game().unwrap().board().clone();
    let mut done = vec![false; board.len()];
    for i in 0..board.len() {
        if done[i] {
            continue;
        }
        let p = board.partner_of(i).unwrap();
        done[i] = true;
        done[p] = true;

        go_to(&mut app, i);
        press(&mut app, KeyCode::Char(' '));
        go_to(&mut app, p);
        press(&mut app, KeyCode::Enter);
        wait_settle(&mut app);
    }

    let game = app.game().unwrap();
    assert!(game.game_over());
    assert_eq!(game.scores(), &[18, 0]);

    let mut fb = FrameBuffer::new(80, 40);
    app.render_into(Viewport::new(80, 40), &mut fb);
    assert!(fb.contains_text("Player 1 wins!"));

    // The menu is unavailable on the summary; restart works.
    assert!(!press(&mut app, KeyCode::Esc));
    press(&mut app, KeyCode::Char('r'));
    let game = app.game().unwrap();
    assert!(!game.game_over());
    assert_eq!(game.episode_id(), 1);
}

#[test]
fn input_is_ignored_while_pair_resolves() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);

    let board = app.game().unwrap().board().clone();
    let a = 0;
    let b = (1..board.len())
        .find(|&j| board.symbol(j) != board.symbol(a))
        .unwrap();

    press(&mut app, KeyCode::Enter);
    go_to(&mut app, b);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().unwrap().phase(), Phase::Resolving);

    // A third flip during the delay is dropped.
    let c = (0..board.len()).find(|&j| j != a && j != b).unwrap();
    go_to(&mut app, c);
    assert!(!press(&mut app, KeyCode::Enter));

    wait_settle(&mut app);
    let game = app.game().unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.moves(), 1);
    assert!(game.flipped().is_empty());
}

#[test]
fn menu_restart_and_resume() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(app.game().unwrap().started());

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.menu(), Some(MenuItem::Resume));

    // Cursor keys drive the menu, not the board.
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu(), Some(MenuItem::Restart));
    assert_eq!(app.cursor().index(), 0);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.menu(), None);
    assert!(!app.game().unwrap().started());

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.menu(), None);
    assert_eq!(app.screen(), Screen::Playing);
}

#[test]
fn new_game_keeps_last_configuration() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().unwrap().scores().len(), 3);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.screen(), Screen::Setup);
    assert_eq!(app.setup().players.get(), 3);

    // Second game draws a different seed.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().unwrap().seed(), 4243);
}

#[test]
fn quit_keys_are_not_commands() {
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
}

#[test]
fn solo_clock_keeps_up_with_late_frames() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(app.game().unwrap().started());

    // Every wake lands 1.5ms after the tick was due.
    let mut clock = TickClock::default();
    for _ in 0..2_000 {
        let due = clock.advance(Duration::from_micros(17_500));
        if due > 0 {
            app.tick(due);
        }
    }

    // 35s of wall time; only the sub-tick carry is still owed.
    let elapsed = app.game().unwrap().elapsed_ms().unwrap();
    assert_eq!(elapsed + clock.carry().as_millis() as u64, 35_000);
    assert!(clock.carry() < Duration::from_millis(TICK_MS as u64));
}
