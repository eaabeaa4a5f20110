//! Choosing between the two board representations at runtime
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dimensions::BoardDimension;
use crate::error::ConfigError;
use crate::grid_representation::GridBoard;
use crate::sparse_representation::SparseBoard;
use crate::types::{BoardStorage, Direction, Players, Position, Token};

/// Which storage a game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Representation {
    /// [GridBoard], constant time lookups
    #[default]
    #[serde(rename = "fast", alias = "f")]
    Fast,
    /// [SparseBoard], memory follows the number of pieces
    #[serde(rename = "memory", alias = "m")]
    MemoryEfficient,
}

impl FromStr for Representation {
    type Err = ConfigError;

    /// accepts the full names as well as the single letters `f` and `m`, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fast" => Ok(Representation::Fast),
            "m" | "memory" => Ok(Representation::MemoryEfficient),
            _ => Err(ConfigError::UnknownRepresentation(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Fast => write!(f, "fast"),
            Representation::MemoryEfficient => write!(f, "memory"),
        }
    }
}

/// Either board, picked when the game starts. Implements [BoardStorage] by
/// delegating, so every rule in [crate::rules::CheckerBoard] works on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBoard {
    #[allow(missing_docs)]
    Grid(GridBoard),
    #[allow(missing_docs)]
    Sparse(SparseBoard),
}

impl AnyBoard {
    /// Builds the requested representation in the opening formation
    pub fn new(representation: Representation, dimension: BoardDimension, players: Players) -> Self {
        match representation {
            Representation::Fast => AnyBoard::Grid(GridBoard::new(dimension, players)),
            Representation::MemoryEfficient => {
                AnyBoard::Sparse(SparseBoard::new(dimension, players))
            }
        }
    }

    /// which representation this is
    pub fn representation(&self) -> Representation {
        match self {
            AnyBoard::Grid(_) => Representation::Fast,
            AnyBoard::Sparse(_) => Representation::MemoryEfficient,
        }
    }
}

impl BoardStorage for AnyBoard {
    fn dimension(&self) -> BoardDimension {
        match self {
            AnyBoard::Grid(b) => b.dimension(),
            AnyBoard::Sparse(b) => b.dimension(),
        }
    }

    fn players(&self) -> Players {
        match self {
            AnyBoard::Grid(b) => b.players(),
            AnyBoard::Sparse(b) => b.players(),
        }
    }

    fn cell(&self, pos: Position) -> Token {
        match self {
            AnyBoard::Grid(b) => b.cell(pos),
            AnyBoard::Sparse(b) => b.cell(pos),
        }
    }

    fn set_cell(&mut self, pos: Position, token: Token) {
        match self {
            AnyBoard::Grid(b) => b.set_cell(pos, token),
            AnyBoard::Sparse(b) => b.set_cell(pos, token),
        }
    }

    fn piece_counts(&self) -> &FxHashMap<Token, u32> {
        match self {
            AnyBoard::Grid(b) => b.piece_counts(),
            AnyBoard::Sparse(b) => b.piece_counts(),
        }
    }

    fn piece_counts_mut(&mut self) -> &mut FxHashMap<Token, u32> {
        match self {
            AnyBoard::Grid(b) => b.piece_counts_mut(),
            AnyBoard::Sparse(b) => b.piece_counts_mut(),
        }
    }

    fn viable_directions(&self) -> &FxHashMap<Token, Vec<Direction>> {
        match self {
            AnyBoard::Grid(b) => b.viable_directions(),
            AnyBoard::Sparse(b) => b.viable_directions(),
        }
    }

    fn viable_directions_mut(&mut self) -> &mut FxHashMap<Token, Vec<Direction>> {
        match self {
            AnyBoard::Grid(b) => b.viable_directions_mut(),
            AnyBoard::Sparse(b) => b.viable_directions_mut(),
        }
    }
}

impl fmt::Display for AnyBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyBoard::Grid(b) => fmt::Display::fmt(b, f),
            AnyBoard::Sparse(b) => fmt::Display::fmt(b, f),
        }
    }
}
