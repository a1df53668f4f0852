//! Castling rights type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::CastlingError;
use crate::board::state::Board;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Column of the rook before castling.
    #[inline]
    #[must_use]
    pub const fn rook_from_col(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    #[must_use]
    pub const fn king_to_col(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Column the king passes through, which is also where the rook lands.
    #[inline]
    #[must_use]
    pub const fn transit_col(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between the king and the rook.
    #[inline]
    #[must_use]
    pub fn between_cols(self) -> std::ops::RangeInclusive<usize> {
        match self {
            CastleSide::Kingside => 5..=6,
            CastleSide::Queenside => 1..=3,
        }
    }

    /// Classify a king move on its home row as a castle by its target column.
    #[must_use]
    pub(crate) fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() || from.col() != KING_HOME_COL {
            return None;
        }
        match to.col() {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Column the king starts on.
pub(crate) const KING_HOME_COL: usize = 4;

/// Castling rights represented as a bitmask.
///
/// Rights only ever go from granted to revoked; nothing in the engine sets
/// a bit once it has been cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// True if the color may still castle to either side.
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastleSide::Kingside) || self.has(color, CastleSide::Queenside)
    }

    /// Copy with one right revoked.
    #[inline]
    #[must_use]
    pub const fn without(self, color: Color, side: CastleSide) -> Self {
        CastlingRights(self.0 & !Self::bit_for(color, side))
    }

    /// Copy with both of a color's rights revoked.
    #[inline]
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        self.without(color, CastleSide::Kingside)
            .without(color, CastleSide::Queenside)
    }

    /// Rights after `from -> to` is played on `board` (the position before
    /// the move).
    ///
    /// A king move clears both of its color's flags, a rook leaving its
    /// original corner clears that side, and any move landing on an original
    /// corner clears the flag of the rook that lived there.
    #[must_use]
    pub fn after_move(self, board: &Board, from: Square, to: Square) -> Self {
        let mut rights = self;
        match board.piece_at(from) {
            Some((color, Piece::King)) => rights = rights.without_color(color),
            Some((color, Piece::Rook)) => {
                if let Some(side) = corner_side(color, from) {
                    rights = rights.without(color, side);
                }
            }
            _ => {}
        }
        for color in Color::BOTH {
            if let Some(side) = corner_side(color, to) {
                rights = rights.without(color, side);
            }
        }
        rights
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; unknown bits are dropped.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

/// Which castling side an original rook corner belongs to, if any.
fn corner_side(color: Color, square: Square) -> Option<CastleSide> {
    if square.row() != color.back_row() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_from_col() == square.col())
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CastlingRights {
    type Err = CastlingError;

    /// Parse the FEN castling field (`KQkq`, any subset, or `-`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(CastlingRights::none());
        }
        if s.is_empty() {
            return Err(CastlingError::Empty);
        }
        let mut bits = 0;
        for c in s.chars() {
            bits |= match c {
                'K' => CASTLE_WHITE_K,
                'Q' => CASTLE_WHITE_Q,
                'k' => CASTLE_BLACK_K,
                'q' => CASTLE_BLACK_Q,
                _ => return Err(CastlingError::InvalidChar { char: c }),
            };
        }
        Ok(CastlingRights(bits))
    }
}
