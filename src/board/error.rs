//! Error types for board parsing and move validation.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { source: CastlingError },
    /// Empty FEN string
    Empty,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { source } => {
                write!(f, "Invalid castling field: {source}")
            }
            FenError::Empty => write!(f, "Empty FEN string"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidCastling { source } => Some(source),
            _ => None,
        }
    }
}

/// Error type for castling-rights field parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastlingError {
    Empty,
    InvalidChar { char: char },
}

impl fmt::Display for CastlingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingError::Empty => write!(f, "Empty castling field"),
            CastlingError::InvalidChar { char } => {
                write!(f, "Invalid castling character '{char}'")
            }
        }
    }
}

impl std::error::Error for CastlingError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for moves rejected by the game controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not to move
    WrongColor { square: Square, to_move: Color },
    /// The destination is not a legal move for the piece
    Illegal { from: Square, to: Square },
    /// The game has already ended
    GameOver,
    /// Move text could not be parsed
    InvalidNotation { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::WrongColor { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}")
            }
            MoveError::Illegal { from, to } => write!(f, "Illegal move {from}-{to}"),
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for difficulty name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyError {
    pub found: String,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected easy, medium or hard",
            self.found
        )
    }
}

impl std::error::Error for DifficultyError {}
