use std::fmt;

use super::{Color, Piece, Square};

/// Piece layout of the back ranks, a-file to h-file.
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 board of optional pieces.
///
/// `Board` is a plain `Copy` value: every move produces a new board and no
/// operation mutates a board it was handed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.squares[Square(0, col).index()] = Some((Color::Black, *piece));
            board.squares[Square(1, col).index()] = Some((Color::Black, Piece::Pawn));
            board.squares[Square(6, col).index()] = Some((Color::White, Piece::Pawn));
            board.squares[Square(7, col).index()] = Some((Color::White, *piece));
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.squares[square.index()].map(|(color, _)| color)
    }

    /// Copy of the board with `square` set to the given contents.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Option<(Color, Piece)>) -> Self {
        self.squares[square.index()] = piece;
        self
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<(Color, Piece)>) {
        self.squares[square.index()] = piece;
    }

    /// Locate a color's king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares
            .iter()
            .position(|p| *p == Some((color, Piece::King)))
            .map(Square::from_index)
    }

    /// Iterate over the squares holding `color`'s pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(idx, p)| match p {
                Some((c, piece)) if *c == color => Some((Square::from_index(idx), *piece)),
                _ => None,
            })
    }

    /// Count of a color's pieces of one kind.
    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.squares
            .iter()
            .filter(|p| **p == Some((color, piece)))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// ASCII diagram, rank 8 at the top, FEN letters for pieces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.to_fen())
    }
}
