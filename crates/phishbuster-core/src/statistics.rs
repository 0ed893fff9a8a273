//! Score and accuracy statistics.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Percentage of correct answers, rounded to one decimal place.
///
/// Returns `0.0` when no rounds have been played.
///
/// Rounding is correct for the `f64` percentage: values exactly halfway
/// between two tenths go to the even tenth, and a halfway ratio whose
/// percentage is not representable rounds toward the side the `f64` lies on
/// (so 3/2000 gives 0.1, 9/2000 gives 0.5).
pub fn accuracy(score: u32, rounds: u32) -> f64 {
    if rounds == 0 {
        return 0.0;
    }

    let numerator = 1000 * u64::from(score);
    let denominator = u64::from(rounds);
    let mut tenths = numerator / denominator;
    let remainder = numerator % denominator;

    if 2 * remainder > denominator {
        tenths += 1;
    } else if 2 * remainder == denominator {
        let pct = 100.0 * f64::from(score) / f64::from(rounds);
        match compare_to_twentieths(pct, 2 * tenths + 1) {
            Ordering::Greater => tenths += 1,
            Ordering::Equal if tenths % 2 == 1 => tenths += 1,
            _ => {}
        }
    }

    tenths as f64 / 10.0
}

/// Exactly compare a positive, normal `x` (below 128) against `twentieths / 20`.
fn compare_to_twentieths(x: f64, twentieths: u64) -> Ordering {
    let bits = x.to_bits();
    let mantissa = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    debug_assert!((-127..0).contains(&exponent));

    // x = mantissa * 2^exponent, so compare 20 * mantissa with twentieths * 2^-exponent.
    let lhs = 20 * mantissa;
    let rhs = u128::from(twentieths) << (-exponent) as u32;
    lhs.cmp(&rhs)
}

/// Summary of a session's results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Correct answers.
    pub score: u32,
    /// Answered rounds.
    pub rounds: u32,
    /// Incorrect answers.
    pub misses: u32,
    /// Percentage correct, one decimal place.
    pub accuracy: f64,
}

impl SessionStats {
    pub fn new(score: u32, rounds: u32) -> Self {
        Self {
            score,
            rounds,
            misses: rounds.saturating_sub(score),
            accuracy: accuracy(score, rounds),
        }
    }
}
