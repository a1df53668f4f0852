use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn push_knight_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.color_at(to) != Some(color) {
                out.push(to);
            }
        }
    }
}
