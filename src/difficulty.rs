use crate::parameters::{D_MAX, D_MIN, D_NEUTRAL, Weights};
use crate::rating::Rating;

/// Difficulty after one review, always within `[1, 5]`.
pub fn next_difficulty(w: &Weights, difficulty: f32, rating: Rating) -> f32 {
    let d = if difficulty.is_finite() {
        difficulty
    } else {
        D_NEUTRAL
    };
    let new_d = match rating {
        Rating::Again => d + w[15],
        Rating::Hard => d + w[15] / 2.0,
        Rating::Good => d,
        Rating::Easy => d - w[16],
    };
    new_d.clamp(D_MIN, D_MAX)
}
