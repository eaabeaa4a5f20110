//! Errors raised by boards, sessions and configuration loading
use thiserror::Error;

use crate::types::{Direction, Position, Token};

/// A board operation was asked to do something that would break the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// the position is not on the board
    #[error("position {position} is off the {dimension}x{dimension} board")]
    OutOfBounds {
        #[allow(missing_docs)]
        position: Position,
        #[allow(missing_docs)]
        dimension: u8,
    },
    /// a move or jump would land on a cell that is not empty
    #[error("cannot land on {position}, it holds '{occupant}'")]
    IllegalDestinationOccupied {
        #[allow(missing_docs)]
        position: Position,
        #[allow(missing_docs)]
        occupant: Token,
    },
    /// a jump was attempted over something other than an opponent piece
    #[error("no opponent piece to capture at {position}, found '{found}'")]
    NoOpponentToCapture {
        #[allow(missing_docs)]
        position: Position,
        #[allow(missing_docs)]
        found: Token,
    },
    /// the token is not one this board can hold in that place
    #[error("'{token}' is not a valid token for this operation")]
    InvalidToken {
        #[allow(missing_docs)]
        token: Token,
    },
    /// pieces can only ever sit on the playable diagonal
    #[error("{position} is a blocked tile")]
    BlockedTile {
        #[allow(missing_docs)]
        position: Position,
    },
    /// a player would be left with fewer than zero pieces
    #[error("player '{player}' has {count} pieces and cannot lose {lost}")]
    PieceCountUnderflow {
        #[allow(missing_docs)]
        player: Token,
        #[allow(missing_docs)]
        count: u32,
        #[allow(missing_docs)]
        lost: u32,
    },
    /// boards are even sized, between 8 and 16
    #[error("{value} is not a board size, expected one of 8, 10, 12, 14 or 16")]
    InvalidDimension {
        #[allow(missing_docs)]
        value: i32,
    },
    /// player tokens must be two different letters
    #[error("'{one}' and '{two}' cannot be used as player pieces")]
    InvalidPlayers {
        #[allow(missing_docs)]
        one: char,
        #[allow(missing_docs)]
        two: char,
    },
}

/// A turn was rejected by a [crate::session::GameSession]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[allow(missing_docs)]
    #[error(transparent)]
    Board(#[from] BoardError),
    /// the selected position is not one of the current player's pieces
    #[error("{position} is not a piece belonging to player '{player}'")]
    NotYourPiece {
        #[allow(missing_docs)]
        position: Position,
        #[allow(missing_docs)]
        player: Token,
    },
    /// the direction is not among the movement options for that piece
    #[error("{direction} is not an available move from {position}")]
    DirectionNotAvailable {
        #[allow(missing_docs)]
        position: Position,
        #[allow(missing_docs)]
        direction: Direction,
    },
    /// no more turns can be taken
    #[error("the game is over, player '{winner}' has won")]
    GameOver {
        #[allow(missing_docs)]
        winner: Token,
    },
}

/// The game configuration could not be read or is not playable
#[derive(Debug, Error)]
pub enum ConfigError {
    #[allow(missing_docs)]
    #[error("could not read the configuration: {0}")]
    Io(#[from] std::io::Error),
    #[allow(missing_docs)]
    #[error("could not parse the configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    Board(#[from] BoardError),
    /// neither a fast nor a memory efficient board
    #[error("unknown board representation '{0}', expected 'fast' (f) or 'memory' (m)")]
    UnknownRepresentation(String),
}

/// Text that does not name one of the four diagonals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}', expected one of NE, NW, SE, SW")]
pub struct ParseDirectionError(pub String);
