#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for playing checkers on boards from 8x8 up to 16x16.
//! The rules (moves, jumps, crowning, win detection) are written once in
//! [rules::CheckerBoard] against the small [types::BoardStorage] contract, and
//! that contract is implemented twice:
//!
//! - [grid_representation::GridBoard] stores every cell, lookups and
//!   placements are a single index.
//! - [sparse_representation::SparseBoard] only stores the positions of live
//!   pieces, so memory follows the piece count instead of the board area, at
//!   the cost of scanning those positions on every lookup.
//!
//! Both produce identical answers and identical renderings for the same
//! sequence of operations. [session::GameSession] drives a game on either one.
//!
//! ```
//! use extended_checkers::config::GameConfig;
//! use extended_checkers::rules::CheckerBoard;
//! use extended_checkers::session::GameSession;
//! use extended_checkers::types::{Direction, Position};
//!
//! let config = GameConfig::from_json_str(r#"{"representation": "memory", "dimension": 10}"#).unwrap();
//! let mut session = GameSession::new(&config).unwrap();
//! let outcome = session.take_turn(Position::new(3, 3), Direction::SE).unwrap();
//! assert_eq!(outcome.landed, Position::new(4, 4));
//! assert_eq!(session.board().piece_count(session.players().one()), 20);
//! ```

#[macro_use]
mod impl_common;

mod bookkeeping;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod grid_representation;
pub mod representation;
pub mod rules;
pub mod session;
pub mod sparse_representation;
pub mod types;
