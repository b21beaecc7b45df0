//! Outcome classification for the most recent placement

use tracing::trace;

use super::scan::{run_length, Axis};
use super::{Foul, Outcome, RuleSet};
use crate::board::{Grid, Stone};
use crate::session::MoveLog;

/// Run length that wins the game
const FIVE: u32 = 5;

/// No five can exist before Black's fifth stone, the ninth move overall.
/// The earliest overline needs 11 moves and the earliest double-four 13,
/// so skipping the scan below this threshold can never hide a foul.
const MIN_MOVES_FOR_FIVE: usize = 9;

/// Classify the position created by the most recent move in `log`.
///
/// An exact five on any axis wins under both rule sets, even when another
/// axis holds a longer run at the same time. Fouls apply only to Black
/// under professional rules; White is never faulted.
pub fn judge(grid: &Grid, log: &MoveLog, rules: RuleSet) -> Outcome {
    let Ok(last) = log.last() else {
        return Outcome::Continue;
    };
    if log.len() < MIN_MOVES_FOR_FIVE {
        return Outcome::Continue;
    }

    let runs = Axis::ALL.map(|axis| run_length(grid, last.pos, last.stone, axis, 0));
    trace!(?last, ?runs, "scanned placement");

    if runs.contains(&FIVE) {
        return Outcome::Win(last.stone);
    }
    let longest = runs.into_iter().max().unwrap_or(1);

    if !rules.is_professional() || last.stone == Stone::White {
        return if longest >= FIVE {
            Outcome::Win(last.stone)
        } else {
            Outcome::Continue
        };
    }

    if longest > FIVE {
        return Outcome::Foul(Foul::Overline);
    }

    // A four one break away from five still threatens from either end, so
    // the four-threat count tolerates a single gap per axis.
    let mut fours = 0;
    for axis in Axis::ALL {
        if run_length(grid, last.pos, last.stone, axis, 1) == 4 {
            fours += 1;
            if fours >= 2 {
                return Outcome::Foul(Foul::DoubleFour);
            }
        }
    }

    Outcome::Continue
}
