//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of delivering mate at the root; mates found deeper score lower.
pub const MATE_SCORE: i32 = 100_000;

/// Scores with absolute value >= this are checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Mates > promotions > big captures > checks > quiet

/// Move that checkmates on the spot
pub const MATE_ORDER_BONUS: i32 = 1_000_000;

/// Move that gives check
pub const CHECK_ORDER_BONUS: i32 = 1_500;

/// Pawn promotion
pub const PROMOTION_ORDER_BONUS: i32 = 8_000;

/// Destination on d4, e4, d5 or e5
pub const CENTER_BONUS: i32 = 30;

/// Destination on the ring of squares around the centre
pub const EXTENDED_CENTER_BONUS: i32 = 10;
