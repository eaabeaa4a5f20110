//! various types that are useful for working with checker boards
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::ops::Add;
use std::str::FromStr;

use crate::dimensions::BoardDimension;
use crate::error::{BoardError, ParseDirectionError};

/// A row/column pair. Rows grow to the south and columns grow to the east, so
/// `(0, 0)` is the top left corner of the rendered board.
///
/// A position says nothing about which board it belongs to, use
/// [Position::is_valid] to check it against a board's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// row index, 0 is the top row
    pub row: i32,
    /// column index, 0 is the left column
    pub column: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// both components multiplied by two, turns a single step into the offset of a jump
    pub fn doubled(self) -> Position {
        Position::new(self.row * 2, self.column * 2)
    }

    /// `self + rhs`, or `None` if either component overflows
    pub fn checked_add(self, rhs: Position) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add(rhs.row)?,
            self.column.checked_add(rhs.column)?,
        ))
    }

    /// true iff `0 <= row < row_bound` and `0 <= column < col_bound`
    pub fn is_valid(self, row_bound: i32, col_bound: i32) -> bool {
        (0..row_bound).contains(&self.row) && (0..col_bound).contains(&self.column)
    }

    /// blocked tiles are the cells with an odd row + column, they never hold a piece
    pub fn is_blocked_tile(self) -> bool {
        (self.row + self.column).rem_euclid(2) == 1
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        Position::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The four diagonals a piece can travel along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// up and to the right
    NE,
    /// up and to the left
    NW,
    /// down and to the right
    SE,
    /// down and to the left
    SW,
}

impl Direction {
    /// the single step this direction takes
    pub const fn offset(self) -> Position {
        match self {
            Direction::NE => Position::new(-1, 1),
            Direction::NW => Position::new(-1, -1),
            Direction::SE => Position::new(1, 1),
            Direction::SW => Position::new(1, -1),
        }
    }

    /// returns all four directions, in the order of `as_index`
    pub const fn all() -> [Direction; 4] {
        [Direction::NE, Direction::NW, Direction::SE, Direction::SW]
    }

    /// the direction that undoes a step in this one
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// converts this direction to a usize index, same order as `Direction::all()`
    pub fn as_index(&self) -> usize {
        match self {
            Direction::NE => 0,
            Direction::NW => 1,
            Direction::SE => 2,
            Direction::SW => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::NE => write!(f, "NE"),
            Direction::NW => write!(f, "NW"),
            Direction::SE => write!(f, "SE"),
            Direction::SW => write!(f, "SW"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NE" => Ok(Direction::NE),
            "NW" => Ok(Direction::NW),
            "SE" => Ok(Direction::SE),
            "SW" => Ok(Direction::SW),
            _ => Err(ParseDirectionError(s.trim().to_string())),
        }
    }
}

/// What occupies a cell. Players are lowercase letters and their kings are the
/// same letter in uppercase, plus the two reserved tokens [Token::EMPTY] and
/// [Token::BLOCKED].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Token(pub char);

impl Token {
    /// a playable cell with nothing on it
    pub const EMPTY: Token = Token(' ');
    /// a cell no piece can ever occupy
    pub const BLOCKED: Token = Token('*');

    #[allow(missing_docs)]
    pub fn as_char(self) -> char {
        self.0
    }

    /// true for [Token::EMPTY] and [Token::BLOCKED]
    pub fn is_reserved(self) -> bool {
        self == Token::EMPTY || self == Token::BLOCKED
    }

    #[allow(missing_docs)]
    pub fn is_king(self) -> bool {
        self.0.is_ascii_uppercase()
    }

    /// the king form of this piece, reserved tokens are returned untouched
    pub fn crowned(self) -> Token {
        Token(self.0.to_ascii_uppercase())
    }

    /// the regular (lowercase) form, which is also how a player is identified
    pub fn base(self) -> Token {
        Token(self.0.to_ascii_lowercase())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two tokens playing a game. Player one starts at the top of the board and
/// moves south, player two starts at the bottom and moves north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Players {
    one: Token,
    two: Token,
}

impl Players {
    /// Builds a pair from two letters. Uppercase input is folded to lowercase
    /// since uppercase marks a king. Anything that is not an ASCII letter, and
    /// two identical letters, are rejected.
    pub fn new(one: char, two: char) -> Result<Self, BoardError> {
        let (lower_one, lower_two) = (one.to_ascii_lowercase(), two.to_ascii_lowercase());
        if !lower_one.is_ascii_alphabetic()
            || !lower_two.is_ascii_alphabetic()
            || lower_one == lower_two
        {
            return Err(BoardError::InvalidPlayers { one, two });
        }

        Ok(Self {
            one: Token(lower_one),
            two: Token(lower_two),
        })
    }

    /// the player that starts at the top and moves first
    pub fn one(&self) -> Token {
        self.one
    }

    /// the player that starts at the bottom
    pub fn two(&self) -> Token {
        self.two
    }

    /// the player a regular or king token belongs to, `None` for anything else
    pub fn owner_of(&self, token: Token) -> Option<Token> {
        let base = token.base();
        if base == self.one || base == self.two {
            Some(base)
        } else {
            None
        }
    }

    /// the player opposing whoever owns `token`
    pub fn opponent_of(&self, token: Token) -> Option<Token> {
        self.owner_of(token)
            .map(|owner| if owner == self.one { self.two } else { self.one })
    }

    /// every token a piece can show: both players, then both kings
    pub fn piece_tokens(&self) -> [Token; 4] {
        [
            self.one,
            self.two,
            self.one.crowned(),
            self.two.crowned(),
        ]
    }
}

impl Default for Players {
    fn default() -> Self {
        Self {
            one: Token('x'),
            two: Token('o'),
        }
    }
}

/// The primitive storage every board representation provides. These accessors
/// do no validation at all; the rules in [crate::rules::CheckerBoard] are built
/// on top of them and check every precondition before touching a cell.
pub trait BoardStorage: Debug {
    /// the side length of this square board
    fn dimension(&self) -> BoardDimension;

    /// the players this board was set up for
    fn players(&self) -> Players;

    /// reads a cell, `pos` must be on the board
    fn cell(&self, pos: Position) -> Token;

    /// overwrites a cell, `pos` must be on the board
    fn set_cell(&mut self, pos: Position, token: Token);

    /// remaining pieces, keyed by the player's base token
    fn piece_counts(&self) -> &FxHashMap<Token, u32>;

    #[allow(missing_docs)]
    fn piece_counts_mut(&mut self) -> &mut FxHashMap<Token, u32>;

    /// legal directions for each of the four piece tokens
    fn viable_directions(&self) -> &FxHashMap<Token, Vec<Direction>>;

    #[allow(missing_docs)]
    fn viable_directions_mut(&mut self) -> &mut FxHashMap<Token, Vec<Direction>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let p = Position::new(4, 4) + Direction::NW.offset();
        assert_eq!(p, Position::new(3, 3));
        assert_eq!(Direction::SW.offset().doubled(), Position::new(2, -2));
        assert_eq!(
            Position::new(2, 2) + Direction::SE.offset().doubled(),
            Position::new(4, 4)
        );
    }

    #[test]
    fn test_position_checked_add() {
        assert_eq!(
            Position::new(3, 3).checked_add(Direction::NE.offset()),
            Some(Position::new(2, 4))
        );
        assert_eq!(Position::new(i32::MAX, 0).checked_add(Direction::SE.offset()), None);
        assert_eq!(Position::new(0, i32::MIN).checked_add(Direction::NW.offset()), None);
    }

    #[test]
    fn test_position_is_valid() {
        assert!(Position::new(0, 0).is_valid(8, 8));
        assert!(Position::new(7, 7).is_valid(8, 8));
        assert!(!Position::new(8, 0).is_valid(8, 8));
        assert!(!Position::new(0, -1).is_valid(8, 8));
        assert!(!Position::new(-1, 3).is_valid(8, 8));
    }

    #[test]
    fn test_blocked_tile_parity() {
        assert!(!Position::new(0, 0).is_blocked_tile());
        assert!(Position::new(0, 7).is_blocked_tile());
        assert!(Position::new(7, 0).is_blocked_tile());
        assert!(Position::new(-1, 0).is_blocked_tile());
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::NE.offset(), Position::new(-1, 1));
        assert_eq!(Direction::NW.offset(), Position::new(-1, -1));
        assert_eq!(Direction::SE.offset(), Position::new(1, 1));
        assert_eq!(Direction::SW.offset(), Position::new(1, -1));
    }

    #[test]
    fn test_direction_opposite_cancels_out() {
        for dir in Direction::all() {
            let back = dir.offset() + dir.opposite().offset();
            assert_eq!(back, Position::new(0, 0));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_direction_index_matches_all() {
        for (idx, dir) in Direction::all().iter().enumerate() {
            assert_eq!(dir.as_index(), idx);
        }
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("ne".parse::<Direction>(), Ok(Direction::NE));
        assert_eq!(" Sw ".parse::<Direction>(), Ok(Direction::SW));
        assert_eq!(Direction::NW.to_string().parse::<Direction>(), Ok(Direction::NW));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(ParseDirectionError("north".to_string()))
        );
    }

    #[test]
    fn test_token_forms() {
        let x = Token('x');
        assert!(!x.is_king());
        assert_eq!(x.crowned(), Token('X'));
        assert!(x.crowned().is_king());
        assert_eq!(x.crowned().crowned(), Token('X'));
        assert_eq!(Token('X').base(), x);
        assert_eq!(Token::EMPTY.crowned(), Token::EMPTY);
        assert_eq!(Token::BLOCKED.crowned(), Token::BLOCKED);
        assert!(Token::EMPTY.is_reserved());
        assert!(!x.is_reserved());
    }

    #[test]
    fn test_players_validation() {
        let players = Players::new('X', 'o').unwrap();
        assert_eq!(players.one(), Token('x'));
        assert_eq!(players.two(), Token('o'));

        assert!(Players::new(' ', 'o').is_err());
        assert!(Players::new('x', '*').is_err());
        assert!(Players::new('x', 'X').is_err());
        assert!(Players::new('7', 'o').is_err());
    }

    #[test]
    fn test_players_ownership() {
        let players = Players::default();
        assert_eq!(players.owner_of(Token('X')), Some(Token('x')));
        assert_eq!(players.owner_of(Token('o')), Some(Token('o')));
        assert_eq!(players.owner_of(Token::EMPTY), None);
        assert_eq!(players.owner_of(Token('z')), None);
        assert_eq!(players.opponent_of(Token('O')), Some(Token('x')));
        assert_eq!(players.opponent_of(Token('x')), Some(Token('o')));
        assert_eq!(players.opponent_of(Token::BLOCKED), None);
    }
}
