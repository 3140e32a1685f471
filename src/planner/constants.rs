/// Slots in every generated schedule.
pub const DAYS_PER_SCHEDULE: usize = 7;

/// Inclusive calorie band for a combo.
pub const MIN_COMBO_CALORIES: i32 = 500;
pub const MAX_COMBO_CALORIES: i32 = 800;

/// Popularity bucket width. Scores are rounded to the nearest multiple of this.
pub const POPULARITY_STEP: f64 = 0.05;

/// Buckets per unit of popularity (1 / POPULARITY_STEP).
pub const POPULARITY_BUCKETS: f64 = 20.0;

/// Maximum bucket distance between any two items of a combo (one step = 0.05).
pub const MAX_BUCKET_SPREAD: i64 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Retry policy caps
// ─────────────────────────────────────────────────────────────────────────────

/// Random draws per slot before the retry policy gives up on a schedule.
pub const DEFAULT_SLOT_ATTEMPTS: usize = 100;

/// Whole-schedule regenerations before the retry policy reports infeasibility.
pub const DEFAULT_SCHEDULE_ATTEMPTS: usize = 50;

/// Neighbor tolerance used by the date-labeled desktop flow.
pub const DESKTOP_NEIGHBOR_TOLERANCE: f64 = 0.1;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Marker emitted for every field of a sentinel slot.
pub const UNAVAILABLE: &str = "N/A";
