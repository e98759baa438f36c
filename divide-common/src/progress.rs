//! Language support progress scoring
//!
//! A language's progress toward full technology support is a weighted sum:
//! 10 points for having valid coordinates, 15 per available model (ASR,
//! NMT, TTS), and 5 per translation pair capped at 40, with the total
//! capped at 100.

/// Points awarded for having valid map coordinates
const COORDINATE_POINTS: u32 = 10;

/// Points awarded per available model
const MODEL_POINTS: u32 = 15;

/// Points awarded per translation pair
const PAIR_POINTS: u32 = 5;

/// Maximum points from translation pairs
const PAIR_POINTS_CAP: u32 = 40;

/// Compute the 0-100 progress score of a single language
///
/// Monotonic in every input and deterministic. `model_count` is the number
/// of available models (at most 3); `pair_count` is the number of
/// translation pairs the language participates in.
pub fn language_progress(has_coordinates: bool, model_count: u32, pair_count: i64) -> u8 {
    let mut score = 0u32;

    if has_coordinates {
        score += COORDINATE_POINTS;
    }

    score += MODEL_POINTS * model_count.min(3);

    let pair_points = pair_count
        .max(0)
        .saturating_mul(PAIR_POINTS as i64)
        .min(PAIR_POINTS_CAP as i64) as u32;
    score += pair_points;

    score.min(100) as u8
}

/// Aggregate progress indicator: rounded mean of per-language scores
///
/// Returns 0 when there are no languages.
pub fn aggregate_progress<I>(scores: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    let mut total = 0u64;
    let mut count = 0u64;
    for score in scores {
        total += score as u64;
        count += 1;
    }

    if count == 0 {
        return 0;
    }

    // Round half up
    ((total + count / 2) / count) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_scores_zero() {
        assert_eq!(language_progress(false, 0, 0), 0);
    }

    #[test]
    fn test_coordinates_only() {
        assert_eq!(language_progress(true, 0, 0), 10);
    }

    #[test]
    fn test_full_support() {
        // 10 + 3*15 + 40 = 95
        assert_eq!(language_progress(true, 3, 8), 95);
    }

    #[test]
    fn test_pair_points_capped() {
        assert_eq!(
            language_progress(true, 3, 1000),
            language_progress(true, 3, 8)
        );
    }

    #[test]
    fn test_model_count_clamped() {
        // More than three models cannot happen, but must not overflow the cap
        assert_eq!(language_progress(false, 10, 0), 45);
    }

    #[test]
    fn test_negative_pair_count_treated_as_zero() {
        assert_eq!(language_progress(true, 1, -5), language_progress(true, 1, 0));
    }

    #[test]
    fn test_bounded_to_100() {
        for models in 0..=10u32 {
            for pairs in [0i64, 1, 7, 8, 9, 100, i64::MAX] {
                let score = language_progress(true, models, pairs);
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_monotonic_in_pair_count() {
        let mut last = 0;
        for pairs in 0..20i64 {
            let score = language_progress(true, 2, pairs);
            assert!(score >= last, "score decreased at pair_count={}", pairs);
            last = score;
        }
    }

    #[test]
    fn test_monotonic_in_model_count() {
        let mut last = 0;
        for models in 0..=3u32 {
            let score = language_progress(false, models, 2);
            assert!(score >= last, "score decreased at model_count={}", models);
            last = score;
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            language_progress(true, 2, 4),
            language_progress(true, 2, 4)
        );
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate_progress(std::iter::empty()), 0);
    }

    #[test]
    fn test_aggregate_single() {
        assert_eq!(aggregate_progress([42]), 42);
    }

    #[test]
    fn test_aggregate_rounds_mean() {
        // (10 + 15) / 2 = 12.5, rounds to 13
        assert_eq!(aggregate_progress([10, 15]), 13);
        // (10 + 14) / 2 = 12
        assert_eq!(aggregate_progress([10, 14]), 12);
    }
}
