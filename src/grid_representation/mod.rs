//! A board that stores every cell in a flat row major grid.
//!
//! Lookups and placements are a single index, and the whole grid is always
//! allocated no matter how many pieces are left. This is the "fast" board.
use itertools::iproduct;

use crate::bookkeeping::Bookkeeping;
use crate::dimensions::BoardDimension;
use crate::types::{Players, Position, Token};

/// A dense board, `dimension * dimension` tokens including the blocked tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    cells: Vec<Token>,
    bookkeeping: Bookkeeping,
}

impl_board_storage!(GridBoard);

impl GridBoard {
    /// Builds a board in the opening formation
    pub fn new(dimension: BoardDimension, players: Players) -> Self {
        let bookkeeping = Bookkeeping::new(dimension, players);
        let size = dimension.as_i32();
        let cells = iproduct!(0..size, 0..size)
            .map(|(row, column)| bookkeeping.opening_token(Position::new(row, column)))
            .collect();

        GridBoard { cells, bookkeeping }
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.is_valid(self.width(), self.width()));
        pos.row as usize * self.bookkeeping.dimension().as_usize() + pos.column as usize
    }

    fn width(&self) -> i32 {
        self.bookkeeping.dimension().as_i32()
    }

    fn token_at(&self, pos: Position) -> Token {
        self.cells[self.index(pos)]
    }

    fn put_token(&mut self, pos: Position, token: Token) {
        let idx = self.index(pos);
        self.cells[idx] = token;
    }
}
