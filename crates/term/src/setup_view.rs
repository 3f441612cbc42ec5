//! SetupView: the start screen where players pick theme, player count and
//! grid size before a game.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{GameConfig, GridSize, Theme, MAX_PLAYERS, MIN_PLAYERS};

/// Field focused on the setup screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Theme,
    Players,
    Grid,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Theme => SetupField::Players,
            SetupField::Players => SetupField::Grid,
            SetupField::Grid => SetupField::Theme,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Theme => SetupField::Grid,
            SetupField::Players => SetupField::Theme,
            SetupField::Grid => SetupField::Players,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupField::Theme => "Select Theme",
            SetupField::Players => "Number of Players",
            SetupField::Grid => "Grid Size",
        }
    }
}

const ORANGE: Rgb = Rgb::new(253, 162, 20);
const NAVY: Rgb = Rgb::new(48, 72, 92);
const SLATE: Rgb = Rgb::new(188, 206, 217);
const PANEL: Rgb = Rgb::new(30, 30, 40);

#[derive(Debug, Default)]
pub struct SetupView;

impl SetupView {
    pub fn render_into(
        &self,
        config: &GameConfig,
        focus: SetupField,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = 46u16.min(viewport.width);
        let h = 13u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        let title = CellStyle::new(Rgb::new(252, 252, 252), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(x, y.saturating_sub(2), w, "memory", title);

        let panel = CellStyle::new(SLATE, PANEL);
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, panel);

        let rows = [SetupField::Theme, SetupField::Players, SetupField::Grid];
        for (i, field) in rows.iter().enumerate() {
            let row = y + 2 + i as u16 * 3;
            let focused = *field == focus;
            let label = if focused { panel.bold() } else { panel.dim() };
            fb.put_char(x + 2, row, if focused { '▶' } else { ' ' }, label);
            fb.put_str(x + 4, row, field.label(), label);

            let mut cx = x + 4;
            for (text, selected) in field_options(*field, config) {
                let style = if selected {
                    CellStyle::new(Rgb::new(252, 252, 252), if focused { ORANGE } else { NAVY }).bold()
                } else {
                    panel
                };
                let cell_w = text.chars().count() as u16 + 2;
                fb.fill_rect(cx, row + 1, cell_w, 1, ' ', style);
                fb.put_str(cx + 1, row + 1, &text, style);
                cx += cell_w + 1;
            }
        }

        let start = CellStyle::new(Rgb::new(252, 252, 252), ORANGE).bold();
        let label = "Start Game";
        let bw = label.len() as u16 + 4;
        let bx = x + w.saturating_sub(bw) / 2;
        fb.fill_rect(bx, y + h.saturating_sub(2), bw, 1, ' ', start);
        fb.put_str_centered(bx, y + h.saturating_sub(2), bw, label, start);

        let hint = CellStyle::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0)).dim();
        fb.put_str_centered(x, y + h + 1, w, "up/down field  left/right change  enter start  q quit", hint);
    }

    pub fn render(&self, config: &GameConfig, focus: SetupField, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(config, focus, viewport, &mut fb);
        fb
    }
}

fn field_options(field: SetupField, config: &GameConfig) -> Vec<(String, bool)> {
    match field {
        SetupField::Theme => [Theme::Numbers, Theme::Icons]
            .iter()
            .map(|t| {
                let name = match t {
                    Theme::Numbers => "Numbers",
                    Theme::Icons => "Icons",
                };
                (name.to_string(), *t == config.theme)
            })
            .collect(),
        SetupField::Players => (MIN_PLAYERS..=MAX_PLAYERS)
            .map(|n| (n.to_string(), n == config.players.get()))
            .collect(),
        SetupField::Grid => [GridSize::Four, GridSize::Six]
            .iter()
            .map(|g| {
                let side = g.side();
                (format!("{side}x{side}"), *g == config.grid)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerCount;

    #[test]
    fn field_cycle() {
        assert_eq!(SetupField::Theme.next(), SetupField::Players);
        assert_eq!(SetupField::Grid.next(), SetupField::Theme);
        assert_eq!(SetupField::Theme.prev(), SetupField::Grid);
    }

    #[test]
    fn renders_every_option() {
        let fb = SetupView.render(&GameConfig::default(), SetupField::Theme, Viewport::new(80, 24));
        for text in ["Select Theme", "Number of Players", "Grid Size", "Numbers", "Icons", "4x4", "6x6", "Start Game"] {
            assert!(fb.contains_text(text), "missing {text}");
        }
    }

    #[test]
    fn selected_player_count_is_highlighted() {
        let config = GameConfig::new(PlayerCount::new(3).unwrap(), Theme::Icons, GridSize::Six);
        let opts = field_options(SetupField::Players, &config);
        let selected: Vec<_> = opts.iter().filter(|(_, s)| *s).map(|(t, _)| t.as_str()).collect();
        assert_eq!(selected, vec!["3"]);

        let grid = field_options(SetupField::Grid, &config);
        assert_eq!(grid[1], ("6x6".to_string(), true));
    }
}
