use fxhash::FxHashMap;

use crate::dimensions::BoardDimension;
use crate::types::{Direction, Players, Position, Token};

/// Everything a board tracks besides its cells. Both representations embed one
/// of these so that counts and directions behave the same no matter how the
/// cells are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Bookkeeping {
    dimension: BoardDimension,
    players: Players,
    piece_counts: FxHashMap<Token, u32>,
    viable_directions: FxHashMap<Token, Vec<Direction>>,
}

impl Bookkeeping {
    pub(crate) fn new(dimension: BoardDimension, players: Players) -> Self {
        let starting_count = dimension.starting_count();
        let mut piece_counts = FxHashMap::default();
        piece_counts.insert(players.one(), starting_count);
        piece_counts.insert(players.two(), starting_count);

        let mut viable_directions = FxHashMap::default();
        viable_directions.insert(players.one(), vec![Direction::SE, Direction::SW]);
        viable_directions.insert(players.two(), vec![Direction::NE, Direction::NW]);
        viable_directions.insert(players.one().crowned(), Direction::all().to_vec());
        viable_directions.insert(players.two().crowned(), Direction::all().to_vec());

        Self {
            dimension,
            players,
            piece_counts,
            viable_directions,
        }
    }

    /// What the opening formation puts at `pos`. Player one fills the rows above
    /// the two middle rows, player two the rows below them.
    pub(crate) fn opening_token(&self, pos: Position) -> Token {
        let middle = self.dimension.as_i32() / 2;
        if pos.is_blocked_tile() {
            Token::BLOCKED
        } else if pos.row < middle - 1 {
            self.players.one()
        } else if pos.row > middle {
            self.players.two()
        } else {
            Token::EMPTY
        }
    }

    pub(crate) fn dimension(&self) -> BoardDimension {
        self.dimension
    }

    pub(crate) fn players(&self) -> Players {
        self.players
    }

    pub(crate) fn piece_counts(&self) -> &FxHashMap<Token, u32> {
        &self.piece_counts
    }

    pub(crate) fn piece_counts_mut(&mut self) -> &mut FxHashMap<Token, u32> {
        &mut self.piece_counts
    }

    pub(crate) fn viable_directions(&self) -> &FxHashMap<Token, Vec<Direction>> {
        &self.viable_directions
    }

    pub(crate) fn viable_directions_mut(&mut self) -> &mut FxHashMap<Token, Vec<Direction>> {
        &mut self.viable_directions
    }
}
