//! The checkers rules, written once against [BoardStorage]
//!
//! Every board representation gets [CheckerBoard] for free through the blanket
//! implementation at the bottom of this module. The primitives it relies on do
//! no checking, so every operation here validates before it writes: an
//! operation that returns an error has not changed the board.
use fxhash::FxHashMap;
use itertools::Itertools;
use std::fmt;
use tracing::{debug, instrument};

use crate::error::BoardError;
use crate::types::{BoardStorage, Direction, Position, Token};

/// The full board contract shared by every representation
pub trait CheckerBoard: BoardStorage {
    #[allow(missing_docs)]
    fn row_num(&self) -> i32 {
        self.dimension().as_i32()
    }

    #[allow(missing_docs)]
    fn col_num(&self) -> i32 {
        self.dimension().as_i32()
    }

    /// true iff `pos` lies on this board
    fn is_on_board(&self, pos: Position) -> bool {
        pos.is_valid(self.row_num(), self.col_num())
    }

    /// returns `pos` back if it lies on this board
    fn check_bounds(&self, pos: Position) -> Result<Position, BoardError> {
        if self.is_on_board(pos) {
            Ok(pos)
        } else {
            Err(BoardError::OutOfBounds {
                position: pos,
                dimension: self.dimension().get(),
            })
        }
    }

    /// the token at `pos`
    fn whats_at_pos(&self, pos: Position) -> Result<Token, BoardError> {
        Ok(self.cell(self.check_bounds(pos)?))
    }

    /// Overwrites the cell at `pos`. [Token::EMPTY] clears it, a player or
    /// king token puts that piece there. Piece counts are not touched. Blocked
    /// tiles can neither be filled nor cleared.
    fn place_piece(&mut self, pos: Position, token: Token) -> Result<(), BoardError> {
        let pos = self.check_bounds(pos)?;
        if token != Token::EMPTY && self.players().owner_of(token).is_none() {
            return Err(BoardError::InvalidToken { token });
        }
        if pos.is_blocked_tile() {
            return Err(BoardError::BlockedTile { position: pos });
        }
        self.set_cell(pos, token);
        Ok(())
    }

    /// Turns the piece at `pos` into a king and returns the new token. Crowning
    /// a king leaves it as it is.
    fn crown_piece(&mut self, pos: Position) -> Result<Token, BoardError> {
        let token = self.whats_at_pos(pos)?;
        if self.players().owner_of(token).is_none() {
            return Err(BoardError::InvalidToken { token });
        }
        let king = token.crowned();
        if king != token {
            debug!(%pos, %king, "crowned");
        }
        self.set_cell(pos, king);
        Ok(king)
    }

    /// Moves the piece at `from` one step in `dir` and returns where it landed
    #[instrument(level = "trace", skip_all, fields(from = %from, dir = %dir))]
    fn move_piece(&mut self, from: Position, dir: Direction) -> Result<Position, BoardError> {
        let token = self.whats_at_pos(from)?;
        if self.players().owner_of(token).is_none() {
            return Err(BoardError::InvalidToken { token });
        }
        let to = from + dir.offset();
        let occupant = self.whats_at_pos(to)?;
        if occupant != Token::EMPTY {
            return Err(BoardError::IllegalDestinationOccupied {
                position: to,
                occupant,
            });
        }

        self.set_cell(to, token);
        self.set_cell(from, Token::EMPTY);
        Ok(to)
    }

    /// Jumps the piece at `from` over the opponent one step away in `dir`,
    /// capturing it, and returns the landing position two steps away.
    #[instrument(level = "trace", skip_all, fields(from = %from, dir = %dir))]
    fn jump_piece(&mut self, from: Position, dir: Direction) -> Result<Position, BoardError> {
        let token = self.whats_at_pos(from)?;
        let mover = self
            .players()
            .owner_of(token)
            .ok_or(BoardError::InvalidToken { token })?;

        let captured_at = from + dir.offset();
        let captured = self.whats_at_pos(captured_at)?;
        let captured_owner = match self.players().owner_of(captured) {
            Some(owner) if owner != mover => owner,
            _ => {
                return Err(BoardError::NoOpponentToCapture {
                    position: captured_at,
                    found: captured,
                })
            }
        };

        let to = from + dir.offset().doubled();
        let occupant = self.whats_at_pos(to)?;
        if occupant != Token::EMPTY {
            return Err(BoardError::IllegalDestinationOccupied {
                position: to,
                occupant,
            });
        }

        let remaining = self.player_lost_pieces(1, captured_owner)?;
        self.set_cell(from, Token::EMPTY);
        self.set_cell(captured_at, Token::EMPTY);
        self.set_cell(to, token);
        debug!(%captured_at, %captured_owner, remaining, "captured");
        Ok(to)
    }

    /// Adds `dir` to the directions `token` may move in, if it is not there yet
    fn add_viable_directions(&mut self, token: Token, dir: Direction) {
        let dirs = self.viable_directions_mut().entry(token).or_default();
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    /// Removes `lost` pieces from whoever owns `token` (a regular or king
    /// token) and returns how many they have left.
    fn player_lost_pieces(&mut self, lost: u32, token: Token) -> Result<u32, BoardError> {
        let player = self
            .players()
            .owner_of(token)
            .ok_or(BoardError::InvalidToken { token })?;
        let count = self.piece_count(player);
        let remaining = count
            .checked_sub(lost)
            .ok_or(BoardError::PieceCountUnderflow {
                player,
                count,
                lost,
            })?;
        self.piece_counts_mut().insert(player, remaining);
        Ok(remaining)
    }

    /// remaining pieces for whoever owns `token`, 0 for anything that is not a piece
    fn piece_count(&self, token: Token) -> u32 {
        self.players()
            .owner_of(token)
            .and_then(|player| self.piece_counts().get(&player).copied())
            .unwrap_or(0)
    }

    /// the directions a piece showing `token` may move in
    fn viable_directions_for(&self, token: Token) -> &[Direction] {
        self.viable_directions()
            .get(&token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// What sits one step away from `pos` in each direction. Directions that
    /// would leave the board are left out.
    fn scan_surrounding_positions(&self, pos: Position) -> FxHashMap<Direction, Token> {
        Direction::all()
            .into_iter()
            .filter_map(|dir| Some((dir, pos.checked_add(dir.offset())?)))
            .filter(|(_, adjacent)| self.is_on_board(*adjacent))
            .map(|(dir, adjacent)| (dir, self.cell(adjacent)))
            .collect()
    }

    /// Has whoever owns `token` won, i.e. does their opponent have no pieces left?
    fn check_player_win(&self, token: Token) -> Result<bool, BoardError> {
        let opponent = self
            .players()
            .opponent_of(token)
            .ok_or(BoardError::InvalidToken { token })?;
        Ok(self.piece_count(opponent) == 0)
    }

    /// the same text the `Display` implementation of every board produces
    fn render(&self) -> String {
        Rendered(self).to_string()
    }
}

impl<B: BoardStorage + ?Sized> CheckerBoard for B {}

/// any board as `Display`, through [write_board]
struct Rendered<'a, B: ?Sized>(&'a B);

impl<B: CheckerBoard + ?Sized> fmt::Display for Rendered<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(self.0, f)
    }
}

/// Draws the board as a grid with column numbers across the top and row
/// numbers down the side, e.g. for an 8x8 board:
///
/// ```text
/// |  | 0| 1| 2| 3| 4| 5| 6| 7|
/// |0 |x |* |x |* |x |* |x |* |
/// ```
pub fn write_board<B: CheckerBoard + ?Sized, W: fmt::Write>(board: &B, out: &mut W) -> fmt::Result {
    let header = (0..board.col_num()).map(|col| format!("{col:>2}|")).join("");
    writeln!(out, "|  |{header}")?;
    for row in 0..board.row_num() {
        write!(out, "|{row:<2}|")?;
        for column in 0..board.col_num() {
            write!(out, "{} |", board.cell(Position::new(row, column)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
