use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn push_pawn_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if matches!(self.color_at(target), Some(c) if c != color) {
                    out.push(target);
                }
            }
        }
    }
}
