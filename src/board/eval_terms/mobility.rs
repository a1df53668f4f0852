//! Mobility evaluation.

use crate::board::state::Board;
use crate::board::types::{CastlingRights, Color};

impl Board {
    /// Number of legal moves `color` has, castling excluded.
    #[must_use]
    pub fn mobility(&self, color: Color) -> i32 {
        self.legal_move_list(color, CastlingRights::none()).len() as i32
    }
}
