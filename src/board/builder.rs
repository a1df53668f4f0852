//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let position = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.board.to_fen(), "4k3/8/8/8/8/8/P7/4K3");
//! ```

use super::state::BACK_RANK;
use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            builder = builder
                .piece(Square(7, col), Color::White, piece)
                .piece(Square(6, col), Color::White, Piece::Pawn)
                .piece(Square(1, col), Color::Black, Piece::Pawn)
                .piece(Square(0, col), Color::Black, piece);
        }
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Finish and return the position.
    #[must_use]
    pub fn build(self) -> Position {
        Position {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
        }
    }

    /// Finish and return only the board.
    #[must_use]
    pub fn build_board(self) -> Board {
        self.board
    }
}
