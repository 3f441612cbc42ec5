//! Screen flow for the terminal host.
//!
//! `App` owns the setup form, the running [`MatchGame`] and the host-only
//! state around it (cursor, menu). Key commands go in through
//! [`App::handle`]; time goes in through [`App::tick`]. Nothing here touches
//! the terminal, so the whole flow is testable without one.

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{GameSnapshot, MatchGame};
use crate::input::{Command, Direction, GridCursor};
use crate::term::{FrameBuffer, GameView, HostView, MenuItem, SetupField, SetupView, Viewport};
use crate::types::{GameAction, GameConfig, ResetTurnPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Playing,
}

pub struct App {
    setup: GameConfig,
    focus: SetupField,
    reset_policy: ResetTurnPolicy,
    next_seed: u32,
    game: Option<MatchGame>,
    cursor: GridCursor,
    menu: Option<MenuItem>,
    snapshot: GameSnapshot,
    game_view: GameView,
    setup_view: SetupView,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            setup: config.game,
            focus: SetupField::default(),
            reset_policy: config.reset_policy,
            next_seed: config.resolve_seed(),
            game: None,
            cursor: GridCursor::new(config.game.grid.side()),
            menu: None,
            snapshot: GameSnapshot::default(),
            game_view: GameView::default(),
            setup_view: SetupView,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.game.is_some() {
            Screen::Playing
        } else {
            Screen::Setup
        }
    }

    /// Current setup-form selection.
    pub fn setup(&self) -> GameConfig {
        self.setup
    }

    pub fn focus(&self) -> SetupField {
        self.focus
    }

    pub fn game(&self) -> Option<&MatchGame> {
        self.game.as_ref()
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    pub fn menu(&self) -> Option<MenuItem> {
        self.menu
    }

    /// Apply one key command. Returns `true` if anything changed.
    pub fn handle(&mut self, cmd: Command) -> bool {
        if self.game.is_some() {
            self.handle_playing(cmd)
        } else {
            self.handle_setup(cmd)
        }
    }

    /// Advance game time.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.game.as_mut() {
            Some(game) => game.tick(elapsed_ms),
            None => false,
        }
    }

    fn handle_setup(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Move(Direction::Up) => self.focus = self.focus.prev(),
            Command::Move(Direction::Down) => self.focus = self.focus.next(),
            Command::Move(dir @ (Direction::Left | Direction::Right)) => {
                let forward = dir == Direction::Right;
                match self.focus {
                    SetupField::Theme => self.setup.theme = self.setup.theme.next(),
                    SetupField::Players => {
                        self.setup.players = if forward {
                            self.setup.players.next()
                        } else {
                            self.setup.players.prev()
                        }
                    }
                    SetupField::Grid => self.setup.grid = self.setup.grid.next(),
                }
            }
            Command::Confirm => self.start_game(),
            Command::Restart | Command::NewGame | Command::ToggleMenu => return false,
        }
        true
    }

    fn handle_playing(&mut self, cmd: Command) -> bool {
        if let Some(selected) = self.menu {
            return match cmd {
                Command::Move(Direction::Up) => {
                    self.menu = Some(selected.prev());
                    true
                }
                Command::Move(Direction::Down) => {
                    self.menu = Some(selected.next());
                    true
                }
                Command::Move(_) => false,
                Command::Confirm => self.choose(selected),
                Command::ToggleMenu => {
                    self.menu = None;
                    true
                }
                Command::Restart => self.choose(MenuItem::Restart),
                Command::NewGame => self.choose(MenuItem::NewGame),
            };
        }

        let Some(game) = self.game.as_mut() else {
            return false;
        };
        match cmd {
            Command::Move(dir) => self.cursor.step(dir),
            Command::Confirm => game.apply_action(GameAction::Select(self.cursor.index())),
            Command::Restart => self.choose(MenuItem::Restart),
            Command::NewGame => self.choose(MenuItem::NewGame),
            Command::ToggleMenu => {
                if game.game_over() {
                    return false;
                }
                self.menu = Some(MenuItem::Resume);
                true
            }
        }
    }

    fn choose(&mut self, item: MenuItem) -> bool {
        self.menu = None;
        match item {
            MenuItem::Restart => {
                if let Some(game) = self.game.as_mut() {
                    game.apply_action(GameAction::Restart);
                }
            }
            MenuItem::NewGame => {
                if let Some(game) = self.game.take() {
                    self.setup = game.config();
                }
                self.focus = SetupField::default();
                debug!("back to setup");
            }
            MenuItem::Resume => {}
        }
        true
    }

    fn start_game(&mut self) {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        info!(
            seed,
            players = self.setup.players.get(),
            theme = self.setup.theme.as_str(),
            grid = self.setup.grid.side(),
            "starting game"
        );
        self.game = Some(MatchGame::new(self.setup, seed).with_reset_policy(self.reset_policy));
        self.cursor = GridCursor::new(self.setup.grid.side());
        self.menu = None;
    }

    /// Draw the current screen into `fb`.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.game.as_ref() {
            Some(game) => {
                game.snapshot_into(&mut self.snapshot);
                let host = HostView {
                    cursor: Some(self.cursor.index()),
                    menu: self.menu,
                };
                self.game_view.render_into(&self.snapshot, &host, viewport, fb);
            }
            None => self.setup_view.render_into(&self.setup, self.focus, viewport, fb),
        }
    }
}
