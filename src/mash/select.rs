use crate::error::ImgmashError;
use crate::mash::store::MashState;
use anyhow::{Context, Result};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index::sample;

/// Weighted draws attempted before giving up on the recency constraint.
const MAX_DRAW_ATTEMPTS: usize = 100;

/// Picks the next two items to pit against each other.
///
/// Items sitting out a rotation countdown are skipped; if that leaves fewer
/// than two, every countdown is cleared and the whole catalog is back in
/// play. Draws are weighted by rating, rejected until the two picks are
/// distinct and not a recent rematch, with a uniform draw as the bounded
/// fallback. Mutates `state` (countdown reset, recent buffer); the caller
/// persists.
pub fn pick_pair<R: Rng>(
    catalog: &[String],
    state: &mut MashState,
    rng: &mut R,
) -> Result<(String, String)> {
    if catalog.len() < 2 {
        return Err(ImgmashError::CatalogTooSmall {
            found: catalog.len(),
        }
        .into());
    }

    let mut available: Vec<&String> = catalog
        .iter()
        .filter(|key| state.exclusion(key.as_str()) == 0)
        .collect();
    if available.len() < 2 {
        state.clear_exclusions();
        available = catalog.iter().collect();
    }

    let weights: Vec<f64> = available
        .iter()
        .map(|key| state.rating(key.as_str()))
        .collect();
    let dist = WeightedIndex::new(&weights).context("build rating-weighted distribution")?;

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let first = available[dist.sample(rng)];
        let second = available[dist.sample(rng)];
        if first != second && !state.was_recent(first, second) {
            let pair = (first.clone(), second.clone());
            state.note_matchup(&pair.0, &pair.1);
            return Ok(pair);
        }
    }

    // Recency can be unsatisfiable on small catalogs; settle for any two
    // distinct items.
    let picked = sample(rng, available.len(), 2);
    let pair = (
        available[picked.index(0)].clone(),
        available[picked.index(1)].clone(),
    );
    state.note_matchup(&pair.0, &pair.1);
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pair_is_always_distinct() {
        let catalog = catalog(&["a.png", "b.png", "c.png", "d.png"]);
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
            assert_ne!(first, second);
        }
    }

    #[test]
    fn fewer_than_two_items_is_an_error() {
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(7);

        let err = pick_pair(&catalog(&["a.png"]), &mut state, &mut rng).unwrap_err();
        assert!(err.to_string().contains("At least two images"));

        let err = pick_pair(&[], &mut state, &mut rng).unwrap_err();
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn benched_items_are_not_selected() {
        let catalog = catalog(&["a.png", "b.png", "c.png", "d.png"]);
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(42);

        // Bench everything except b and d.
        for _ in 0..3 {
            state.record_outcome("a.png", "x.png");
        }
        for _ in 0..3 {
            state.record_outcome("c.png", "x.png");
        }
        assert!(state.exclusion("a.png") > 0);
        assert!(state.exclusion("c.png") > 0);

        for _ in 0..50 {
            let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
            assert!(first == "b.png" || first == "d.png");
            assert!(second == "b.png" || second == "d.png");
        }
    }

    #[test]
    fn too_few_eligible_clears_every_countdown() {
        let catalog = catalog(&["a.png", "b.png", "c.png"]);
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(9);

        for key in ["a.png", "b.png"] {
            for _ in 0..3 {
                state.record_outcome(key, "x.png");
            }
        }
        assert!(state.exclusion("a.png") > 0);
        assert!(state.exclusion("b.png") > 0);

        // Only c.png is eligible, so selection must fall back to the full
        // catalog and clear the countdowns.
        pick_pair(&catalog, &mut state, &mut rng).unwrap();
        assert_eq!(state.exclusion("a.png"), 0);
        assert_eq!(state.exclusion("b.png"), 0);
    }

    #[test]
    fn recent_rematches_are_avoided_when_possible() {
        let catalog = catalog(&["a.png", "b.png", "c.png"]);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let mut state = MashState::default();
            state.note_matchup("a.png", "b.png");
            state.note_matchup("b.png", "c.png");

            // Only the a/c pairing is fresh.
            let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
            let mut pair = [first.as_str(), second.as_str()];
            pair.sort();
            assert_eq!(pair, ["a.png", "c.png"]);
        }
    }

    #[test]
    fn exhausted_recency_falls_back_to_any_distinct_pair() {
        let catalog = catalog(&["a.png", "b.png"]);
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(3);

        state.note_matchup("a.png", "b.png");

        // The only possible pair is a recent one; the bounded retry must
        // still hand it back rather than spin forever.
        let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn selection_is_recorded_in_the_recent_buffer() {
        let catalog = catalog(&["a.png", "b.png", "c.png"]);
        let mut state = MashState::default();
        let mut rng = StdRng::seed_from_u64(5);

        let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
        assert!(state.was_recent(&first, &second));
        assert_eq!(state.recent_matchups().len(), 1);
    }

    #[test]
    fn higher_rated_items_come_up_more_often() {
        let catalog = catalog(&["a.png", "b.png", "c.png"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut heavy_hits = 0u32;
        for _ in 0..300 {
            let mut state = MashState::default();
            // a.png carries most of the weight.
            state.set_rating("a.png", 5000.0);

            let (first, second) = pick_pair(&catalog, &mut state, &mut rng).unwrap();
            if first == "a.png" || second == "a.png" {
                heavy_hits += 1;
            }
        }
        // a.png holds 5000 of 7800 total weight, so it should land in the
        // pair far more often than not.
        assert!(heavy_hits > 200, "a.png appeared only {heavy_hits}/300 times");
    }
}
