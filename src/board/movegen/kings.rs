use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Square};

impl Board {
    /// One-step king moves. Castling lives in `castling.rs` because it
    /// needs the rights record and the check oracle.
    pub(crate) fn push_king_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        for &to in &KING_TARGETS[from.index()] {
            if self.color_at(to) != Some(color) {
                out.push(to);
            }
        }
    }
}
