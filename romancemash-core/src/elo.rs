/// Elo rating updates for a single pairwise outcome.
///
/// Pure arithmetic plus one bucket-level helper. No draws, no clamping:
/// ratings may drift below zero or arbitrarily high.
use crate::constants::{ELO_SCALE, K_FACTOR};
use crate::error::RankError;
use crate::types::{Bucket, RatingChange, Winner};

/// Probability that a side rated `rating_a` beats a side rated `rating_b`.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// New ratings for both sides after one duel.
///
/// Both expectations are computed from the pre-update ratings.
pub fn update_ratings(rating_a: f64, rating_b: f64, winner: Winner) -> (f64, f64) {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);

    let (score_a, score_b) = match winner {
        Winner::A => (1.0, 0.0),
        Winner::B => (0.0, 1.0),
    };

    (
        rating_a + K_FACTOR * (score_a - expected_a),
        rating_b + K_FACTOR * (score_b - expected_b),
    )
}

/// Apply a duel outcome to the two participating entries of `bucket`.
///
/// Fails without touching the bucket if either item is missing or both sides
/// are the same item.
pub fn apply_duel(
    bucket: &mut Bucket,
    item_a: &str,
    item_b: &str,
    winner: Winner,
) -> Result<RatingChange, RankError> {
    if item_a == item_b {
        return Err(RankError::SameItem(item_a.to_string()));
    }

    let rating_a = bucket
        .rating(item_a)
        .ok_or_else(|| RankError::UnknownItem(item_a.to_string()))?;
    let rating_b = bucket
        .rating(item_b)
        .ok_or_else(|| RankError::UnknownItem(item_b.to_string()))?;

    let (new_a, new_b) = update_ratings(rating_a, rating_b, winner);

    // Both lookups succeeded above, so these slots exist.
    if let Some(slot) = bucket.rating_mut(item_a) {
        *slot = new_a;
    }
    if let Some(slot) = bucket.rating_mut(item_b) {
        *slot = new_b;
    }

    Ok(RatingChange {
        before: (rating_a, rating_b),
        after: (new_a, new_b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::constants::INITIAL_RATING;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_expected_score_equal_ratings() {
        assert!((expected_score(1000.0, 1000.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_expected_score_symmetry() {
        let ratings = [-250.0, 0.0, 640.5, 1000.0, 1016.0, 1873.2, 3000.0];
        for &ra in &ratings {
            for &rb in &ratings {
                let sum = expected_score(ra, rb) + expected_score(rb, ra);
                assert!((sum - 1.0).abs() < EPS, "ra={ra} rb={rb} sum={sum}");
            }
        }
    }

    #[test]
    fn test_expected_score_favors_higher_rating() {
        assert!(expected_score(1400.0, 1000.0) > 0.9);
        assert!((expected_score(1400.0, 1000.0) - 10.0 / 11.0).abs() < EPS);
    }

    #[test]
    fn test_equal_ratings_move_by_half_k() {
        let (a, b) = update_ratings(1000.0, 1000.0, Winner::A);
        assert_eq!(a, 1016.0);
        assert_eq!(b, 984.0);

        let (a, b) = update_ratings(1000.0, 1000.0, Winner::B);
        assert_eq!(a, 984.0);
        assert_eq!(b, 1016.0);
    }

    #[test]
    fn test_update_conserves_rating_mass() {
        let cases = [
            (1000.0, 1000.0, Winner::A),
            (1016.0, 984.0, Winner::A),
            (1200.0, 800.0, Winner::B),
            (-40.0, 2100.0, Winner::A),
        ];
        for (ra, rb, winner) in cases {
            let (na, nb) = update_ratings(ra, rb, winner);
            assert!(((na - ra) + (nb - rb)).abs() < 1e-9, "ra={ra} rb={rb}");
        }
    }

    #[test]
    fn test_second_win_gains_less() {
        let (a, b) = update_ratings(1016.0, 984.0, Winner::A);
        let expected = expected_score(1016.0, 984.0);
        assert!((expected - 0.5460).abs() < 1e-3);

        let gain = a - 1016.0;
        assert!((gain - 32.0 * (1.0 - expected)).abs() < EPS);
        assert!(gain < 16.0);
        assert!((b - (984.0 - gain)).abs() < EPS);
    }

    #[test]
    fn test_upset_moves_more_than_expected_win() {
        let (_, underdog_win) = update_ratings(1200.0, 1000.0, Winner::B);
        let (_, underdog_loss) = update_ratings(1200.0, 1000.0, Winner::A);
        assert!(underdog_win - 1000.0 > 1000.0 - underdog_loss);
    }

    #[test]
    fn test_no_clamping_below_zero() {
        let (_, b) = update_ratings(10.0, 5.0, Winner::A);
        assert!(b < 5.0);
        let (a, _) = update_ratings(0.0, 0.0, Winner::B);
        assert!(a < 0.0);
    }

    #[test]
    fn test_apply_duel_touches_only_participants() {
        let catalog = Catalog::new(["X", "Y", "Z"]).unwrap();
        let mut bucket = Bucket::new(&catalog);

        let change = apply_duel(&mut bucket, "X", "Y", Winner::A).unwrap();
        assert_eq!(change.before, (INITIAL_RATING, INITIAL_RATING));
        assert_eq!(change.after, (1016.0, 984.0));
        assert_eq!(change.delta(), 16.0);

        assert_eq!(bucket.rating("X"), Some(1016.0));
        assert_eq!(bucket.rating("Y"), Some(984.0));
        assert_eq!(bucket.rating("Z"), Some(INITIAL_RATING));
    }

    #[test]
    fn test_apply_duel_rejects_unknown_item() {
        let catalog = Catalog::new(["X", "Y"]).unwrap();
        let mut bucket = Bucket::new(&catalog);
        let before = bucket.clone();

        let err = apply_duel(&mut bucket, "X", "Nope", Winner::A).unwrap_err();
        assert_eq!(err, RankError::UnknownItem("Nope".to_string()));
        assert_eq!(bucket, before);
    }

    #[test]
    fn test_apply_duel_rejects_same_item() {
        let catalog = Catalog::new(["X", "Y"]).unwrap();
        let mut bucket = Bucket::new(&catalog);
        let err = apply_duel(&mut bucket, "X", "X", Winner::B).unwrap_err();
        assert_eq!(err, RankError::SameItem("X".to_string()));
        assert_eq!(bucket.rating("X"), Some(INITIAL_RATING));
    }
}
