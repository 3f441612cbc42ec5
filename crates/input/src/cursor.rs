//! Board cursor: turns directional input into a tile index.

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position on a square board. Movement stops at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    side: u8,
    row: u8,
    col: u8,
}

impl GridCursor {
    pub fn new(side: u8) -> Self {
        Self {
            side: side.max(1),
            row: 0,
            col: 0,
        }
    }

    pub fn side(&self) -> u8 {
        self.side
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major tile index under the cursor.
    pub fn index(&self) -> usize {
        self.row as usize * self.side as usize + self.col as usize
    }

    /// Move one cell; returns `false` at an edge.
    pub fn step(&mut self, dir: Direction) -> bool {
        let last = self.side - 1;
        match dir {
            Direction::Up if self.row > 0 => self.row -= 1,
            Direction::Down if self.row < last => self.row += 1,
            Direction::Left if self.col > 0 => self.col -= 1,
            Direction::Right if self.col < last => self.col += 1,
            _ => return false,
        }
        true
    }
}
