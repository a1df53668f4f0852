//! FEN reading and writing.
//!
//! The engine only needs piece placement, side to move and castling rights,
//! so the en passant and move-counter fields are accepted and ignored.

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// A board together with the state the caller threads alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
}

impl Position {
    /// The standard starting position with White to move and all rights.
    #[must_use]
    pub fn startpos() -> Self {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
        }
    }

    /// Parse a FEN string. Missing side or castling fields default to
    /// White and no rights.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let board = parse_placement(placement)?;

        let side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling = match parts.next() {
            None => CastlingRights::none(),
            Some(field) => field
                .parse()
                .map_err(|source| FenError::InvalidCastling { source })?,
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
        })
    }

    /// FEN with placement, side to move and castling fields.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {} {}", self.board.to_fen(), side, self.castling)
    }
}

impl Board {
    /// Parse a board from FEN. Only the placement field is used.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        parse_placement(placement)
    }

    /// FEN placement field for this board.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        fen
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set(Square(row, col), Some((color, piece)));
            col += 1;
        }
        if col != 8 {
            return Err(FenError::WrongFileCount {
                rank: 8 - row,
                files: col,
            });
        }
    }
    Ok(board)
}
