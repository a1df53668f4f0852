//! Game controller.
//!
//! Threads the values the rules engine leaves to its caller (castling
//! rights, side to move, history) and validates moves coming from a player.

use rand::Rng;

use crate::board::{
    find_best_move_with, Board, CastleSide, CastlingRights, Color, Difficulty, GameStatus, Move,
    MoveError, MoveOutcome, Piece, Position, SearchParams, SearchResult, Square,
    PROMOTION_PIECES,
};

/// One move as it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub piece: Piece,
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Coordinate notation, e.g. `e2-e4`.
    #[must_use]
    pub fn notation(&self) -> String {
        self.mv.to_string()
    }
}

/// A game in progress between two sides.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    rights: CastlingRights,
    to_move: Color,
    status: GameStatus,
    history: Vec<MoveRecord>,
    captured: [Vec<Piece>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::startpos())
    }

    /// A game continuing from an arbitrary position.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = position
            .board
            .game_status(position.side_to_move, position.castling);
        Game {
            board: position.board,
            rights: position.castling,
            to_move: position.side_to_move,
            status,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces `color` has taken from the opponent, in capture order.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// The current position, suitable for saving and restoring.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            board: self.board,
            side_to_move: self.to_move,
            castling: self.rights,
        }
    }

    /// Legal destinations for the piece on `from`, empty unless it belongs
    /// to the side to move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        match self.board.color_at(from) {
            Some(color) if color == self.to_move && !self.status.is_over() => {
                self.board.legal_moves(from, self.rights)
            }
            _ => Vec::new(),
        }
    }

    /// Play a move for the side to move.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let (color, _) = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if color != self.to_move {
            return Err(MoveError::WrongColor {
                square: from,
                to_move: self.to_move,
            });
        }
        if !self.board.legal_moves(from, self.rights).contains(&to) {
            return Err(MoveError::Illegal { from, to });
        }
        Ok(self.commit(from, to, promotion))
    }

    /// Play a move written as `e2-e4`, `e2e4` or `e7e8q`.
    pub fn play_notation(&mut self, notation: &str) -> Result<MoveRecord, MoveError> {
        let invalid = || MoveError::InvalidNotation {
            notation: notation.to_string(),
        };
        let compact: String = notation
            .chars()
            .filter(|c| !matches!(c, '-' | '=' | ' '))
            .collect();
        if !(4..=5).contains(&compact.len()) || !compact.is_ascii() {
            return Err(invalid());
        }
        let from: Square = compact[0..2].parse().map_err(|_| invalid())?;
        let to: Square = compact[2..4].parse().map_err(|_| invalid())?;
        let promotion = match compact[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(p) if PROMOTION_PIECES.contains(&p) => Some(p),
                _ => return Err(invalid()),
            },
            None => None,
        };
        self.play(from, to, promotion)
    }

    /// Let the engine move for the side to move.
    pub fn play_ai(&mut self, difficulty: Difficulty) -> Result<SearchResult, MoveError> {
        self.play_ai_with(&difficulty.params(), &mut rand::thread_rng())
    }

    /// Engine move with explicit tuning and randomness source.
    pub fn play_ai_with<R: Rng + ?Sized>(
        &mut self,
        params: &SearchParams,
        rng: &mut R,
    ) -> Result<SearchResult, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let result = find_best_move_with(&self.board, self.to_move, self.rights, params, rng)
            .ok_or(MoveError::GameOver)?;
        let mv = result.best_move;
        self.commit(mv.from, mv.to, mv.promotion);
        Ok(result)
    }

    fn commit(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> MoveRecord {
        let color = self.to_move;
        let piece = self.board.piece_at(from).map_or(Piece::Pawn, |(_, p)| p);
        let rights = self.rights.after_move(&self.board, from, to);
        let (board, outcome) = self.board.apply_move_with_promotion(from, to, promotion);

        let mv = if outcome.is_castle {
            CastleSide::from_king_move(from, to)
                .map_or(Move::new(from, to), |side| Move::castling(from, side))
        } else if outcome.is_promotion {
            let promoted = board.piece_at(to).map_or(Piece::Queen, |(_, p)| p);
            Move::with_promotion(from, to, promoted)
        } else {
            Move::new(from, to)
        };

        if let Some(victim) = outcome.captured {
            self.captured[color.index()].push(victim);
        }

        let record = MoveRecord {
            mv,
            color,
            piece,
            outcome,
        };
        self.board = board;
        self.rights = rights;
        self.to_move = color.opponent();
        self.status = self.board.game_status(self.to_move, self.rights);
        self.history.push(record);
        record
    }
}
