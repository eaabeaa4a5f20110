//! Board sizes
//!
//! Boards are always square, so a single side length describes them. Only even
//! sizes from 8 to 16 are playable: the opening formation leaves exactly two
//! empty rows in the middle and each player fills the rows above or below them.

use serde::Serialize;
use std::fmt;

use crate::error::BoardError;

/// The side length of a square board, always one of 8, 10, 12, 14 or 16
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoardDimension(u8);

impl BoardDimension {
    /// smallest playable board
    pub const MIN: u8 = 8;
    /// largest playable board
    pub const MAX: u8 = 16;

    /// Validates a requested size, rejecting odd and out of range values
    pub fn new(value: i32) -> Result<Self, BoardError> {
        if value % 2 == 0 && (Self::MIN as i32..=Self::MAX as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(BoardError::InvalidDimension { value })
        }
    }

    /// Forces any requested size onto the nearest playable one: too small
    /// becomes 8, too large becomes 16, and odd sizes round down.
    pub fn clamped(value: i32) -> Self {
        let value = value.clamp(Self::MIN as i32, Self::MAX as i32);
        Self((value - value % 2) as u8)
    }

    #[allow(missing_docs)]
    pub fn get(&self) -> u8 {
        self.0
    }

    #[allow(missing_docs)]
    pub fn as_i32(&self) -> i32 {
        self.0 as i32
    }

    #[allow(missing_docs)]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// pieces each player starts with
    pub fn starting_count(&self) -> u32 {
        let half = self.0 as u32 / 2;
        (half - 1) * half
    }
}

impl Default for BoardDimension {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for BoardDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
