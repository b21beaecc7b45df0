//! Game rules: run scanning along the four axes and outcome judging
//!
//! Two rule sets exist. Casual play ends the game on any run of five or
//! more, for either color. Professional play restricts Black: an exact
//! five still wins, but six-or-more is an overline foul and a single move
//! creating two four-threats is a double-four foul. White is never
//! subject to fouls.

pub mod judge;
pub mod scan;

// Re-exports for convenient access
pub use judge::judge;
pub use scan::{run_length, Axis};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Stone;

/// Which rule set a session plays under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSet {
    /// Five or more in a row wins, for either color; no fouls
    #[default]
    Casual,
    /// Overline and double-four are fouls for Black; White plays as casual
    Professional,
}

impl RuleSet {
    #[inline]
    pub fn is_professional(self) -> bool {
        matches!(self, RuleSet::Professional)
    }
}

/// Result of judging the most recent placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game goes on
    Continue,
    /// The placement completed a winning line
    Win(Stone),
    /// The placement is a foul. The stone stands and the game is not
    /// ended; the caller decides the consequence.
    Foul(Foul),
}

/// Kinds of fouls under professional rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foul {
    /// Six or more in a row
    Overline,
    /// Two or more four-in-a-row threats created by a single move
    DoubleFour,
    /// Reserved; no detection is implemented and nothing produces it
    DoubleThree,
}

impl fmt::Display for Foul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Foul::Overline => "overline",
            Foul::DoubleFour => "double four",
            Foul::DoubleThree => "double three",
        })
    }
}
