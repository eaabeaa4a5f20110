//! A board that only remembers where the pieces are.
//!
//! Each of the four piece tokens (both players and both kings) owns a list of
//! the positions showing it. Blocked tiles are worked out from the position's
//! parity and anything else not in a list is empty, so memory follows the
//! number of live pieces rather than the board area. Lookups and placements
//! scan those lists. This is the "memory efficient" board.
use fxhash::FxHashMap;

use crate::bookkeeping::Bookkeeping;
use crate::dimensions::BoardDimension;
use crate::types::{Players, Position, Token};

/// A sparse board, keyed by piece token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseBoard {
    pieces: FxHashMap<Token, Vec<Position>>,
    bookkeeping: Bookkeeping,
}

impl_board_storage!(SparseBoard);

impl SparseBoard {
    /// Builds a board in the opening formation
    pub fn new(dimension: BoardDimension, players: Players) -> Self {
        let bookkeeping = Bookkeeping::new(dimension, players);
        let mut pieces: FxHashMap<Token, Vec<Position>> = players
            .piece_tokens()
            .into_iter()
            .map(|token| (token, Vec::new()))
            .collect();

        let size = dimension.as_i32();
        for row in 0..size {
            for column in 0..size {
                let pos = Position::new(row, column);
                let token = bookkeeping.opening_token(pos);
                if let Some(positions) = pieces.get_mut(&token) {
                    positions.push(pos);
                }
            }
        }

        SparseBoard {
            pieces,
            bookkeeping,
        }
    }

    /// the positions currently showing `token`, empty for untracked tokens
    pub fn positions_of(&self, token: Token) -> &[Position] {
        self.pieces
            .get(&token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// how many positions are stored across all tracked tokens
    pub fn stored_positions(&self) -> usize {
        self.pieces.values().map(Vec::len).sum()
    }

    fn token_at(&self, pos: Position) -> Token {
        if pos.is_blocked_tile() {
            return Token::BLOCKED;
        }
        self.pieces
            .iter()
            .find(|(_, positions)| positions.contains(&pos))
            .map(|(token, _)| *token)
            .unwrap_or(Token::EMPTY)
    }

    fn put_token(&mut self, pos: Position, token: Token) {
        for positions in self.pieces.values_mut() {
            positions.retain(|p| *p != pos);
        }
        // EMPTY and BLOCKED are never tracked, dropping the position is enough
        if let Some(positions) = self.pieces.get_mut(&token) {
            positions.push(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::grid_representation::GridBoard;
    use crate::rules::CheckerBoard;
    use crate::types::{BoardStorage, Direction};
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const X: Token = Token('x');
    const O: Token = Token('o');

    fn assert_same(grid: &GridBoard, sparse: &SparseBoard) {
        let size = grid.row_num();
        for row in 0..size {
            for column in 0..size {
                let pos = Position::new(row, column);
                assert_eq!(grid.whats_at_pos(pos), sparse.whats_at_pos(pos), "at {}", pos);
            }
        }
        assert_eq!(grid.to_string(), sparse.to_string());
        assert_eq!(grid.piece_counts(), sparse.piece_counts());
        assert_eq!(grid.viable_directions(), sparse.viable_directions());
    }

    #[test]
    fn test_opening_tracks_only_pieces() {
        for size in [8, 10, 12, 14, 16] {
            let dimension = BoardDimension::new(size).unwrap();
            let board = SparseBoard::new(dimension, Players::default());
            let starting = dimension.starting_count() as usize;
            assert_eq!(board.positions_of(X).len(), starting);
            assert_eq!(board.positions_of(O).len(), starting);
            assert!(board.positions_of(Token('X')).is_empty());
            assert!(board.positions_of(Token('O')).is_empty());
            assert_eq!(board.stored_positions(), 2 * starting);
            assert!(board.positions_of(Token::EMPTY).is_empty());
        }
    }

    #[test]
    fn test_positions_move_between_lists() {
        let mut board = SparseBoard::new(BoardDimension::default(), Players::default());
        board.crown_piece(Position::new(2, 2)).unwrap();
        assert_eq!(board.positions_of(Token('X')), &[Position::new(2, 2)]);
        assert!(!board.positions_of(X).contains(&Position::new(2, 2)));

        board.place_piece(Position::new(2, 2), Token::EMPTY).unwrap();
        assert!(board.positions_of(Token('X')).is_empty());
        assert_eq!(board.stored_positions(), 23);
    }

    #[test]
    fn test_memory_follows_captures() {
        let mut board = SparseBoard::new(BoardDimension::default(), Players::default());
        board.place_piece(Position::new(5, 5), Token::EMPTY).unwrap();
        board.place_piece(Position::new(3, 3), X).unwrap();
        board.place_piece(Position::new(2, 2), Token::EMPTY).unwrap();
        board.place_piece(Position::new(4, 4), O).unwrap();
        let before = board.stored_positions();

        board.jump_piece(Position::new(4, 4), Direction::NW).unwrap();
        assert_eq!(board.stored_positions(), before - 1);
        assert_eq!(board.whats_at_pos(Position::new(2, 2)), Ok(O));
    }

    #[test]
    fn test_matches_grid_for_scripted_game() {
        let dimension = BoardDimension::default();
        let mut grid = GridBoard::new(dimension, Players::default());
        let mut sparse = SparseBoard::new(dimension, Players::default());
        assert_same(&grid, &sparse);

        let script: Vec<Box<dyn Fn(&mut dyn CheckerBoardMut)>> = vec![
            Box::new(|b| b.step(Position::new(2, 2), Direction::SE)),
            Box::new(|b| b.step(Position::new(5, 5), Direction::NW)),
            Box::new(|b| b.jump(Position::new(3, 3), Direction::SE)),
            Box::new(|b| b.step(Position::new(5, 3), Direction::NE)),
            Box::new(|b| b.crown(Position::new(5, 5))),
            Box::new(|b| b.place(Position::new(3, 3), Token::EMPTY)),
            Box::new(|b| b.place(Position::new(3, 3), Token('O'))),
        ];
        for operation in script {
            operation(&mut grid);
            operation(&mut sparse);
            assert_same(&grid, &sparse);
        }
    }

    #[test]
    fn test_blocked_tiles_stay_blocked_in_both() {
        let dimension = BoardDimension::default();
        let mut grid = GridBoard::new(dimension, Players::default());
        let mut sparse = SparseBoard::new(dimension, Players::default());

        for pos in [Position::new(0, 1), Position::new(3, 4), Position::new(7, 0)] {
            for token in [Token::EMPTY, X, Token('O')] {
                let expected = Err(BoardError::BlockedTile { position: pos });
                assert_eq!(grid.place_piece(pos, token), expected);
                assert_eq!(sparse.place_piece(pos, token), expected);
            }
            assert_eq!(grid.whats_at_pos(pos), Ok(Token::BLOCKED));
        }
        assert_same(&grid, &sparse);
    }

    #[test]
    fn test_matches_grid_for_random_operations() {
        for size in [8, 12, 16] {
            let dimension = BoardDimension::new(size).unwrap();
            let players = Players::default();
            let mut grid = GridBoard::new(dimension, players);
            let mut sparse = SparseBoard::new(dimension, players);
            let mut rng = SmallRng::seed_from_u64(size as u64);
            let tokens = [X, O, Token('X'), Token('O'), Token::EMPTY];

            for _ in 0..500 {
                let pos = Position::new(rng.gen_range(-1..=size), rng.gen_range(-1..=size));
                let dir = *Direction::all().choose(&mut rng).unwrap();
                match rng.gen_range(0..4) {
                    0 => {
                        let token = *tokens.choose(&mut rng).unwrap();
                        assert_eq!(grid.place_piece(pos, token), sparse.place_piece(pos, token));
                    }
                    1 => assert_eq!(grid.move_piece(pos, dir), sparse.move_piece(pos, dir)),
                    2 => assert_eq!(grid.jump_piece(pos, dir), sparse.jump_piece(pos, dir)),
                    _ => assert_eq!(grid.crown_piece(pos), sparse.crown_piece(pos)),
                }
                assert_eq!(
                    grid.scan_surrounding_positions(pos),
                    sparse.scan_surrounding_positions(pos)
                );
            }
            assert_same(&grid, &sparse);
        }
    }

    /// lets one scripted operation run against both representations
    trait CheckerBoardMut {
        fn step(&mut self, pos: Position, dir: Direction);
        fn jump(&mut self, pos: Position, dir: Direction);
        fn crown(&mut self, pos: Position);
        fn place(&mut self, pos: Position, token: Token);
    }

    impl<B: CheckerBoard> CheckerBoardMut for B {
        fn step(&mut self, pos: Position, dir: Direction) {
            self.move_piece(pos, dir).unwrap();
        }

        fn jump(&mut self, pos: Position, dir: Direction) {
            self.jump_piece(pos, dir).unwrap();
        }

        fn crown(&mut self, pos: Position) {
            self.crown_piece(pos).unwrap();
        }

        fn place(&mut self, pos: Position, token: Token) {
            self.place_piece(pos, token).unwrap();
        }
    }
}
