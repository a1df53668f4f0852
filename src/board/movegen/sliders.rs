use super::super::{Board, Color, Square};

impl Board {
    /// Ray-cast along each direction: stop at the edge, before a friendly
    /// piece, or on an enemy piece.
    pub(crate) fn push_slider_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        out: &mut Vec<Square>,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.color_at(next) {
                    None => out.push(next),
                    Some(c) => {
                        if c != color {
                            out.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
