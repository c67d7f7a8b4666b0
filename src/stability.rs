use crate::parameters::{D_MAX, D_MIN, D_NEUTRAL, S_MAX, S_MIN, TARGET_RETENTION, Weights};
use crate::rating::Rating;

/// Stability assigned when an item graduates from NEW, LEARNING or
/// RELEARNING. A failed first answer starts from nothing.
pub fn initial_stability(rating: Rating) -> f32 {
    match rating {
        Rating::Again => 0.0,
        Rating::Hard => 0.5,
        Rating::Good => 1.0,
        Rating::Easy => 2.0,
    }
}

/// Stability after a review of an item that is already in REVIEW.
///
/// `repetitions` is the count including the review being applied; the
/// per-rating bonus weight only kicks in once it exceeds 1.
pub fn next_stability(
    w: &Weights,
    stability: f32,
    difficulty: f32,
    rating: Rating,
    repetitions: u32,
) -> f32 {
    let s = if stability.is_finite() {
        stability.max(S_MIN)
    } else {
        S_MIN
    };
    let new_s = match rating {
        Rating::Again => stability_after_failure(w, s),
        _ => stability_after_success(w, s, difficulty, rating, repetitions),
    };
    if new_s.is_nan() {
        return S_MIN;
    }
    new_s.clamp(S_MIN, S_MAX)
}

fn stability_after_failure(w: &Weights, s: f32) -> f32 {
    w[0] * s.powf(w[1])
}

fn stability_after_success(w: &Weights, s: f32, d: f32, rating: Rating, repetitions: u32) -> f32 {
    let d = if d.is_finite() {
        d.clamp(D_MIN, D_MAX)
    } else {
        D_NEUTRAL
    };
    let r = TARGET_RETENTION.powf(s);
    let difficulty_factor = (w[2] * (d - D_NEUTRAL)).exp();
    let base = match rating {
        Rating::Hard => 3,
        Rating::Good => 7,
        _ => 11,
    };
    let [wa, wb, wc, wd]: [f32; 4] = [w[base], w[base + 1], w[base + 2], w[base + 3]];
    let bonus = if repetitions > 1 { wd } else { 1.0 };
    s * (wa.exp() * r.powf(wb) * difficulty_factor.powf(wc)).mul_add(bonus, 1.0)
}
