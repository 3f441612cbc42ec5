//! Board module - tile layout for one game
//!
//! A board holds `side²` tiles. Each of the `side²/2` symbols appears exactly
//! twice, and tile identity is positional: index `i` is row `i / side`, column
//! `i % side`.

use crate::rng::SimpleRng;
use crate::types::{GridSize, Symbol};

/// Shuffled tile layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: GridSize,
    tiles: Vec<Symbol>,
}

impl Board {
    /// Generate a fresh board: every symbol twice, then an unbiased shuffle.
    pub fn generate(grid: GridSize, rng: &mut SimpleRng) -> Self {
        let mut tiles = Vec::with_capacity(grid.tile_count());
        for id in 0..grid.pair_count() {
            let symbol = Symbol(id as u8);
            tiles.push(symbol);
            tiles.push(symbol);
        }
        rng.shuffle(&mut tiles);
        Self { grid, tiles }
    }

    /// Build a board from an explicit layout.
    ///
    /// Returns `None` unless the layout has `side²` tiles and each symbol
    /// `0..pair_count` appears exactly twice.
    pub fn from_symbols(grid: GridSize, tiles: Vec<Symbol>) -> Option<Self> {
        if tiles.len() != grid.tile_count() {
            return None;
        }
        let mut counts = vec![0u8; grid.pair_count()];
        for symbol in &tiles {
            let slot = counts.get_mut(symbol.id() as usize)?;
            *slot += 1;
        }
        if counts.iter().all(|&c| c == 2) {
            Some(Self { grid, tiles })
        } else {
            None
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn side(&self) -> u8 {
        self.grid.side()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        self.tiles.get(index).copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.tiles
    }

    /// Index of the other tile carrying the same symbol.
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.symbol(index)?;
        self.tiles
            .iter()
            .enumerate()
            .find(|&(i, &s)| i != index && s == symbol)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_counts(board: &Board) -> Vec<usize> {
        let mut counts = vec![0; board.grid().pair_count()];
        for s in board.symbols() {
            counts[s.id() as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_generate_four_by_four() {
        let mut rng = SimpleRng::new(1);
        let board = Board::generate(GridSize::Four, &mut rng);

        assert_eq!(board.len(), 16);
        assert!(symbol_counts(&board).iter().all(|&c| c == 2));
    }

    #[test]
    fn test_generate_six_by_six() {
        let mut rng = SimpleRng::new(1);
        let board = Board::generate(GridSize::Six, &mut rng);

        assert_eq!(board.len(), 36);
        assert_eq!(symbol_counts(&board).len(), 18);
        assert!(symbol_counts(&board).iter().all(|&c| c == 2));
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = Board::generate(GridSize::Six, &mut SimpleRng::new(42));
        let b = Board::generate(GridSize::Six, &mut SimpleRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_boards_differ() {
        let mut rng = SimpleRng::new(42);
        let a = Board::generate(GridSize::Six, &mut rng);
        let b = Board::generate(GridSize::Six, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_is_shuffled() {
        // The unshuffled layout is 0,0,1,1,...; a shuffle should not leave it intact.
        let board = Board::generate(GridSize::Six, &mut SimpleRng::new(5));
        let sorted: Vec<Symbol> = (0..18u8).flat_map(|i| [Symbol(i), Symbol(i)]).collect();
        assert_ne!(board.symbols(), sorted.as_slice());
    }

    #[test]
    fn test_from_symbols_validates_pairing() {
        let good: Vec<Symbol> = (0..8u8).flat_map(|i| [Symbol(i), Symbol(i)]).collect();
        assert!(Board::from_symbols(GridSize::Four, good.clone()).is_some());

        let mut tripled = good.clone();
        tripled[1] = Symbol(0);
        tripled[0] = Symbol(0);
        tripled[2] = Symbol(0);
        assert!(Board::from_symbols(GridSize::Four, tripled).is_none());

        let mut out_of_range = good.clone();
        out_of_range[0] = Symbol(9);
        assert!(Board::from_symbols(GridSize::Four, out_of_range).is_none());

        assert!(Board::from_symbols(GridSize::Six, good).is_none());
    }

    #[test]
    fn test_partner_of() {
        let board = Board::generate(GridSize::Four, &mut SimpleRng::new(8));
        for i in 0..board.len() {
            let p = board.partner_of(i).unwrap();
            assert_ne!(p, i);
            assert_eq!(board.symbol(p), board.symbol(i));
        }
        assert_eq!(board.partner_of(16), None);
    }
}
