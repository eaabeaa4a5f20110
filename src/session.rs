//! Turn taking on top of a board
//!
//! A [GameSession] owns one board and knows whose turn it is. It decides which
//! moves a piece is offered, carries out a chosen move or jump, crowns pieces
//! that reach the far row and detects the winner.
use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{BoardError, SessionError};
use crate::representation::AnyBoard;
use crate::rules::CheckerBoard;
use crate::types::{BoardStorage, Direction, Players, Position, Token};

/// What a single turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    /// who moved
    pub player: Token,
    /// where the piece started
    pub from: Position,
    /// where the piece ended up
    pub landed: Position,
    /// the position of the captured piece, if this was a jump
    pub captured: Option<Position>,
    /// true if the piece became a king on this turn
    pub crowned: bool,
    /// set once the game is over
    pub winner: Option<Token>,
}

/// One game between two players on one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: AnyBoard,
    current: Token,
    winner: Option<Token>,
}

impl GameSession {
    /// Starts a game from a configuration, player one moves first
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let players = config.players()?;
        let dimension = config.board_dimension()?;
        info!(
            %dimension,
            representation = %config.representation,
            one = %players.one(),
            two = %players.two(),
            "starting game"
        );
        Ok(Self::with_board(AnyBoard::new(
            config.representation,
            dimension,
            players,
        )))
    }

    /// Starts a game on an existing board, player one moves first
    pub fn with_board(board: AnyBoard) -> Self {
        let current = board.players().one();
        Self {
            board,
            current,
            winner: None,
        }
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &AnyBoard {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn players(&self) -> Players {
        self.board.players()
    }

    /// whose turn it is
    pub fn current_player(&self) -> Token {
        self.current
    }

    /// the winner, once there is one
    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    #[allow(missing_docs)]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Checks that `pos` holds one of the current player's pieces (regular or
    /// king) and returns its token.
    pub fn select_piece(&self, pos: Position) -> Result<Token, SessionError> {
        let token = self.board.whats_at_pos(pos)?;
        if self.players().owner_of(token) == Some(self.current) {
            Ok(token)
        } else {
            Err(SessionError::NotYourPiece {
                position: pos,
                player: self.current,
            })
        }
    }

    /// The directions the current player's piece at `pos` can take: a step
    /// onto an empty neighbour, or a jump over an opponent onto an empty cell.
    pub fn movement_options(&self, pos: Position) -> Result<Vec<Direction>, SessionError> {
        let token = self.select_piece(pos)?;
        Ok(self.options_for(pos, token))
    }

    /// every (piece, direction) pair the current player could play
    pub fn available_turns(&self) -> Vec<(Position, Direction)> {
        self.turns_for(self.current)
    }

    /// Picks one of the current player's available turns uniformly at random,
    /// used to drive playouts
    pub fn random_available_turn(&self, rng: &mut impl Rng) -> Option<(Position, Direction)> {
        self.available_turns().choose(rng).copied()
    }

    /// Plays the current player's piece at `pos` in `dir`, stepping or jumping
    /// depending on what is next to it, then crowns it if it reached the far
    /// row and checks for a winner. The turn passes to the opponent unless the
    /// game is over.
    pub fn take_turn(&mut self, pos: Position, dir: Direction) -> Result<TurnOutcome, SessionError> {
        if let Some(winner) = self.winner {
            return Err(SessionError::GameOver { winner });
        }
        let token = self.select_piece(pos)?;
        if !self.options_for(pos, token).contains(&dir) {
            return Err(SessionError::DirectionNotAvailable {
                position: pos,
                direction: dir,
            });
        }

        let player = self.current;
        let step = pos + dir.offset();
        let (landed, captured) = if self.board.whats_at_pos(step)? == Token::EMPTY {
            (self.board.move_piece(pos, dir)?, None)
        } else {
            (self.board.jump_piece(pos, dir)?, Some(step))
        };
        let crowned = self.crown_if_promoted(token, landed)?;
        debug!(%player, %pos, %dir, %landed, "turn taken");

        self.winner = self.detect_winner()?;
        match self.winner {
            Some(winner) => info!(%winner, "game won"),
            None => self.current = self.opponent_of(player),
        }

        Ok(TurnOutcome {
            player,
            from: pos,
            landed,
            captured,
            crowned,
            winner: self.winner,
        })
    }

    fn opponent_of(&self, player: Token) -> Token {
        let players = self.players();
        if player == players.one() {
            players.two()
        } else {
            players.one()
        }
    }

    fn options_for(&self, pos: Position, token: Token) -> Vec<Direction> {
        let players = self.players();
        let opponent = players.opponent_of(token);
        let surroundings = self.board.scan_surrounding_positions(pos);

        self.board
            .viable_directions_for(token)
            .iter()
            .copied()
            .filter(|dir| match surroundings.get(dir) {
                Some(&neighbour) if neighbour == Token::EMPTY => true,
                Some(&neighbour) if players.owner_of(neighbour) == opponent => {
                    let landing = pos + dir.offset().doubled();
                    self.board.whats_at_pos(landing) == Ok(Token::EMPTY)
                }
                _ => false,
            })
            .collect()
    }

    fn turns_for(&self, player: Token) -> Vec<(Position, Direction)> {
        let size = self.board.row_num();
        iproduct!(0..size, 0..size)
            .map(|(row, column)| Position::new(row, column))
            .filter_map(|pos| {
                let token = self.board.whats_at_pos(pos).ok()?;
                (self.players().owner_of(token) == Some(player)).then(|| (pos, token))
            })
            .flat_map(|(pos, token)| {
                self.options_for(pos, token)
                    .into_iter()
                    .map(move |dir| (pos, dir))
            })
            .collect()
    }

    /// player one is crowned on the bottom row, player two on the top row
    fn crown_if_promoted(&mut self, token: Token, landed: Position) -> Result<bool, BoardError> {
        let players = self.players();
        let far_row = if token == players.one() {
            Some(self.board.row_num() - 1)
        } else if token == players.two() {
            Some(0)
        } else {
            None
        };

        if far_row == Some(landed.row) {
            self.board.crown_piece(landed)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// A player wins once the opponent has no pieces. A player who is left
    /// without a single available turn loses as well.
    fn detect_winner(&self) -> Result<Option<Token>, BoardError> {
        let players = self.players();
        for player in [players.one(), players.two()] {
            if self.board.check_player_win(player)? {
                return Ok(Some(player));
            }
        }

        let next = self.opponent_of(self.current);
        if self.turns_for(next).is_empty() {
            debug!(%next, "no moves left");
            return Ok(Some(self.current));
        }
        Ok(None)
    }
}
