//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{format_elapsed, GameSnapshot, GameSummary, Outcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Symbol, Theme, TileStatus};

/// Glyphs for the icons theme. Covers the 18 pairs of a 6x6 board with room
/// to spare; every glyph is a single terminal column wide.
pub const ICONS: [char; 32] = [
    '★', '♠', '♣', '♥', '♦', '♪', '♫', '☀', '☂', '☃', '☎', '☘', '☕', '☯', '☮', '⚓',
    '✈', '✿', '❄', '✂', '✉', '✎', '⌛', '⚡', '⚑', '⚙', '♞', '♜', '♛', '☢', '♨', '☺',
];

/// Text shown on a face-up tile.
pub fn symbol_label(theme: Theme, symbol: Symbol) -> String {
    match theme {
        Theme::Numbers => symbol.id().to_string(),
        Theme::Icons => ICONS[symbol.id() as usize % ICONS.len()].to_string(),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Entries of the in-game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Restart,
    NewGame,
    Resume,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Restart, MenuItem::NewGame, MenuItem::Resume];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Restart => "Restart",
            MenuItem::NewGame => "New Game",
            MenuItem::Resume => "Resume",
        }
    }

    pub fn next(self) -> Self {
        match self {
            MenuItem::Restart => MenuItem::NewGame,
            MenuItem::NewGame => MenuItem::Resume,
            MenuItem::Resume => MenuItem::Restart,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            MenuItem::Restart => MenuItem::Resume,
            MenuItem::NewGame => MenuItem::Restart,
            MenuItem::Resume => MenuItem::NewGame,
        }
    }
}

/// Host-side state drawn on top of the game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostView {
    /// Tile under the keyboard cursor.
    pub cursor: Option<usize>,
    /// Highlighted entry when the menu is open.
    pub menu: Option<MenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const NAVY: Rgb = Rgb::new(48, 72, 92);
const ORANGE: Rgb = Rgb::new(253, 162, 20);
const SLATE: Rgb = Rgb::new(188, 206, 217);
const GREEN: Rgb = Rgb::new(120, 200, 120);
const WHITE: Rgb = Rgb::new(252, 252, 252);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(20, 24, 32);

/// Terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            tile_w: 5,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Key help shown under the board.
const HINTS: &str = "arrows move  enter flip  m menu  r restart  n new game  q quit";

/// Screen placement of the board frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of a tile, or `None` past the end of the board.
    pub fn tile_origin(&self, snap: &GameSnapshot, viewport: Viewport, index: usize) -> Option<(u16, u16)> {
        let side = snap.side() as usize;
        if index >= snap.tiles.len() || side == 0 {
            return None;
        }
        let layout = self.layout(snap, viewport);
        Some(self.tile_pos(layout, index / side, index % side))
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let side = snap.side() as u16;
        let board_w = side * self.tile_w + side.saturating_sub(1) * self.gap;
        let board_h = side * self.tile_h + side.saturating_sub(1) * self.gap;
        let w = board_w + 4;
        let h = board_h + 2;

        // One header row above the frame, one hint row below it.
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h + 2) / 2 + 1,
            AnchorY::Top => 1,
        };
        Layout { x, y, w, h }
    }

    fn tile_pos(&self, layout: Layout, row: usize, col: usize) -> (u16, u16) {
        let px = layout.x + 2 + col as u16 * (self.tile_w + self.gap);
        let py = layout.y + 1 + row as u16 * (self.tile_h + self.gap);
        (px, py)
    }

    /// Render the game into an existing framebuffer.
    ///
    /// This is the allocation-light hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        host: &HostView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        fb.put_str(layout.x, layout.y.saturating_sub(1), "memory", border.bold());
        fb.fill_rect(layout.x + 1, layout.y + 1, layout.w - 2, layout.h - 2, ' ', CellStyle::new(WHITE, BOARD_BG));
        fb.draw_box(layout.x, layout.y, layout.w, layout.h, border);

        let side = snap.side().max(1) as usize;
        let show_cursor = host.menu.is_none() && !snap.game_over;
        for (i, tile) in snap.tiles.iter().enumerate() {
            let (px, py) = self.tile_pos(layout, i / side, i % side);
            let cursor = show_cursor && host.cursor == Some(i);
            self.draw_tile(fb, px, py, snap.config.theme, tile.symbol, tile.status, cursor);
        }

        self.draw_side_panel(fb, snap, viewport, layout);
        self.draw_hints(fb, viewport, layout);

        if let Some(summary) = &snap.summary {
            self.draw_summary(fb, summary, viewport);
        } else if let Some(selected) = host.menu {
            self.draw_menu(fb, selected, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, host: &HostView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, host, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        theme: Theme,
        symbol: Symbol,
        status: TileStatus,
        cursor: bool,
    ) {
        let style = match status {
            TileStatus::Hidden => CellStyle::new(WHITE, NAVY),
            TileStatus::FaceUp => CellStyle::new(WHITE, ORANGE).bold(),
            TileStatus::JustMatched => CellStyle::new(BLACK, GREEN).bold(),
            TileStatus::Matched => CellStyle::new(NAVY, SLATE),
        };
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        let mid = py + self.tile_h / 2;
        if status.is_revealed() {
            fb.put_str_centered(px, mid, self.tile_w, &symbol_label(theme, symbol), style);
        }
        if cursor {
            let mark = CellStyle::new(Rgb::new(255, 230, 80), style.bg).bold();
            fb.put_char(px, mid, '[', mark);
            fb.put_char(px + self.tile_w - 1, mid, ']', mark);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: Layout) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        let dim = value.dim();

        let mut y = layout.y;
        if let Some(ms) = snap.elapsed_ms {
            fb.put_str(panel_x, y, "TIME", label);
            fb.put_str(panel_x, y + 1, &format_elapsed(ms), value);
            y += 3;
            fb.put_str(panel_x, y, "MOVES", label);
            fb.put_u32(panel_x, y + 1, snap.moves, value);
            y += 3;
        } else {
            fb.put_str(panel_x, y, "SCORES", label);
            y += 1;
            for (player, &score) in snap.scores.iter().enumerate() {
                let active = player == snap.turn && !snap.game_over;
                let style = if active { CellStyle::new(BLACK, ORANGE).bold() } else { value };
                fb.put_char(panel_x, y, if active { '▶' } else { ' ' }, style);
                fb.put_char(panel_x + 1, y, 'P', style);
                fb.put_u32(panel_x + 2, y, player as u32 + 1, style);
                fb.put_char(panel_x + 3, y, ' ', style);
                let w = fb.put_u32(panel_x + 4, y, score, style);
                fb.put_char(panel_x + 4 + w, y, ' ', style);
                y += 1;
            }
            y += 1;
            fb.put_str(panel_x, y, "MOVES", label);
            fb.put_u32(panel_x, y + 1, snap.moves, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "PAIRS", label);
        let w = fb.put_u32(panel_x, y + 1, (snap.matched_count / 2) as u32, value);
        fb.put_char(panel_x + w, y + 1, '/', dim);
        fb.put_u32(panel_x + w + 1, y + 1, (snap.tiles.len() / 2) as u32, dim);
    }

    fn draw_hints(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: Layout) {
        let y = layout.y + layout.h;
        let style = CellStyle::new(Rgb::new(140, 140, 150), BLACK).dim();
        fb.put_str_centered(0, y, viewport.width, HINTS, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, w: u16, h: u16) -> (u16, u16, u16) {
        let w = w.min(viewport.width);
        let h = h.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        let bg = CellStyle::new(WHITE, Rgb::new(30, 30, 40));
        fb.fill_rect(x, y, w, h, ' ', bg);
        fb.draw_box(x, y, w, h, bg);
        (x, y, w)
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, summary: &GameSummary, viewport: Viewport) {
        let rows = match &summary.outcome {
            Outcome::Solo { .. } => 2,
            _ => summary.standings.len() as u16,
        };
        let (x, y, w) = self.draw_panel(fb, viewport, 42, rows + 8);

        let bg = Rgb::new(30, 30, 40);
        let title = CellStyle::new(WHITE, bg).bold();
        let text = CellStyle::new(SLATE, bg);
        let strong = CellStyle::new(WHITE, bg).bold();
        let winner = CellStyle::new(BLACK, ORANGE).bold();

        fb.put_str_centered(x, y + 1, w, &summary.headline(), title);
        fb.put_str_centered(x, y + 2, w, summary.subtitle(), text);

        let left = x + 3;
        let right = x + w.saturating_sub(3);
        let mut row = y + 4;
        match &summary.outcome {
            Outcome::Solo { elapsed_ms, moves } => {
                let time = format_elapsed(*elapsed_ms);
                fb.put_str(left, row, "Time Elapsed", text);
                fb.put_str(right.saturating_sub(time.chars().count() as u16), row, &time, strong);
                row += 1;
                let moves = format!("{moves} Moves");
                fb.put_str(left, row, "Moves Taken", text);
                fb.put_str(right.saturating_sub(moves.chars().count() as u16), row, &moves, strong);
                row += 1;
            }
            _ => {
                for standing in &summary.standings {
                    let style = if standing.winner { winner } else { text };
                    let name = if standing.winner {
                        format!("Player {} (Winner!)", standing.player + 1)
                    } else {
                        format!("Player {}", standing.player + 1)
                    };
                    let pairs = format!("{} Pairs", standing.score);
                    fb.fill_rect(left, row, right.saturating_sub(left), 1, ' ', style);
                    fb.put_str(left, row, &name, style);
                    fb.put_str(right.saturating_sub(pairs.chars().count() as u16), row, &pairs, style);
                    row += 1;
                }
            }
        }

        fb.put_str_centered(x, row + 1, w, "r Restart   n Setup New Game", text);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, selected: MenuItem, viewport: Viewport) {
        let (x, y, w) = self.draw_panel(fb, viewport, 24, MenuItem::ALL.len() as u16 * 2 + 3);

        let bg = Rgb::new(30, 30, 40);
        let normal = CellStyle::new(SLATE, bg);
        let active = CellStyle::new(WHITE, ORANGE).bold();
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let row = y + 2 + i as u16 * 2;
            let style = if *item == selected { active } else { normal };
            fb.fill_rect(x + 3, row, w.saturating_sub(6), 1, ' ', style);
            fb.put_str_centered(x + 3, row, w.saturating_sub(6), item.label(), style);
        }
    }
}
