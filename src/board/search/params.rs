//! Difficulty presets and the search tuning record.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::DifficultyError;

/// Named strength levels offered to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The tuning record for this level.
    #[must_use]
    pub const fn params(self) -> SearchParams {
        match self {
            Difficulty::Easy => SearchParams {
                max_depth: 2,
                root_beam: Some(8),
                positional_weight: 0,
                mobility_weight: 0,
                capture_weight: 4,
                jitter: 200,
                alpha_beta: true,
            },
            Difficulty::Medium => SearchParams {
                max_depth: 3,
                root_beam: Some(14),
                positional_weight: 50,
                mobility_weight: 0,
                capture_weight: 10,
                jitter: 40,
                alpha_beta: true,
            },
            Difficulty::Hard => SearchParams {
                max_depth: 4,
                root_beam: None,
                positional_weight: 100,
                mobility_weight: 4,
                capture_weight: 10,
                jitter: 0,
                alpha_beta: true,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError {
                found: s.to_string(),
            }),
        }
    }
}

/// Everything that makes one difficulty play differently from another.
///
/// Built once per search and passed by reference to the evaluator, the
/// move orderer and the search itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies searched below the root; leaves are evaluated statically.
    pub max_depth: u32,
    /// Root moves expanded after ordering, `None` for all.
    pub root_beam: Option<usize>,
    /// Positional layer weight in percent, 0 disables it.
    pub positional_weight: i32,
    /// Centipawns per legal move of mobility advantage, 0 disables it.
    pub mobility_weight: i32,
    /// Multiplier on the victim's value when ordering captures.
    pub capture_weight: i32,
    /// Upper bound of random noise added to ordering scores.
    pub jitter: i32,
    /// Cut off branches once `beta <= alpha`.
    pub alpha_beta: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Difficulty::Medium.params()
    }
}

impl From<Difficulty> for SearchParams {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(DifficultyError {
                found: "expert".to_string()
            })
        );
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse(), Ok(d));
        }
    }

    #[test]
    fn test_presets_scale_with_difficulty() {
        let easy = Difficulty::Easy.params();
        let medium = Difficulty::Medium.params();
        let hard = Difficulty::Hard.params();
        assert!(easy.max_depth < medium.max_depth && medium.max_depth < hard.max_depth);
        assert!(easy.jitter > medium.jitter && medium.jitter > hard.jitter);
        assert_eq!(easy.positional_weight, 0);
        assert!(hard.positional_weight > 0);
        assert_eq!(hard.root_beam, None);
        assert!(easy.root_beam < medium.root_beam);
    }
}
