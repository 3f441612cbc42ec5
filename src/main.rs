//! Terminal memory game runner (default binary).
//!
//! Crossterm for input and a framebuffer-based renderer. The loop polls for
//! keys until the next fixed tick, then credits the measured wall time to the
//! game clock in whole ticks.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::logging::init_tracing;
use tui_memory::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_memory::{App, AppConfig, TickClock};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        init_tracing(path)?;
    }
    info!(?config, "tui-memory starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    let mut clock = TickClock::default();
    let mut last_wake = Instant::now();

    loop {
        app.render_into(viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = clock.until_next().saturating_sub(last_wake.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        app.handle(cmd);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let due_ms = clock.advance(now - last_wake);
        last_wake = now;
        if due_ms > 0 {
            app.tick(due_ms);
        }
    }
}
