//! Positional evaluation terms.
//!
//! Each term scores one color on its own; the evaluator takes the
//! difference between the two sides.

mod mobility;
mod piece_squares;
mod rooks;
pub(crate) mod tables;
