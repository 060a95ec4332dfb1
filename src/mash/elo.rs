pub const K_FACTOR: f64 = 32.0;
pub const INITIAL_RATING: f64 = 1400.0;

pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// Applies one duel outcome and returns the updated (winner, loser) ratings.
/// Each side is adjusted against its own expected score, so the two deltas
/// are not forced to cancel out.
pub fn update_duel(winner: f64, loser: f64, k: f64) -> (f64, f64) {
    let exp_winner = expected_score(winner, loser);
    let exp_loser = expected_score(loser, winner);
    (
        winner + k * (1.0 - exp_winner),
        loser + k * (0.0 - exp_loser),
    )
}
