use crate::planner::constants::{MAX_BUCKET_SPREAD, POPULARITY_BUCKETS};

/// Bucket index of a popularity score: `score * 20` rounded half-to-even.
///
/// Comparisons between scores go through bucket indices so float error in the
/// normalized values can never flip a closeness check.
#[inline]
pub fn bucket(score: f64) -> i64 {
    (score * POPULARITY_BUCKETS).round_ties_even() as i64
}

/// Round a popularity score to the nearest 0.05 (ties to even).
///
/// `normalize(0.875) == 0.9`, `normalize(0.625) == 0.6`.
#[inline]
pub fn normalize(score: f64) -> f64 {
    bucket(score) as f64 / POPULARITY_BUCKETS
}

/// Are two scores within one bucket of each other after normalization?
#[inline]
pub fn is_close(a: f64, b: f64) -> bool {
    (bucket(a) - bucket(b)).abs() <= MAX_BUCKET_SPREAD
}

/// Mean of normalized scores, rounded to 2 decimals.
pub fn mean_normalized(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: i64 = scores.iter().map(|&s| bucket(s)).sum();
    let mean = total as f64 / (POPULARITY_BUCKETS * scores.len() as f64);
    round2(mean)
}

/// Round to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
