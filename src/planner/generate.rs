use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::catalog::validate_menu;
use crate::error::{PlannerError, Result};
use crate::models::{DayLabeling, MenuItem, Schedule};
use crate::planner::assign::{assign_greedy, assign_with_retry};
use crate::planner::config::{FailurePolicy, PlannerConfig};
use crate::planner::enumerate::enumerate_with;

/// Seeded generator when `seed` is given, entropy-seeded otherwise.
pub fn planner_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Build a schedule from a catalog: enumerate, then assign under the
/// configured failure policy.
///
/// The catalog is validated first, so duplicate names or out-of-range values
/// fail with [`PlannerError::InvalidCatalog`]. An empty enumeration is
/// reported as [`PlannerError::NoCandidates`] under either policy; retrying
/// cannot fix it.
pub fn generate_schedule<R: Rng + ?Sized>(
    catalog: &[MenuItem],
    labeling: &DayLabeling,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Schedule> {
    config.validate()?;
    validate_menu(catalog)?;

    let candidates = enumerate_with(catalog, config);
    if candidates.is_empty() {
        warn!(items = catalog.len(), "catalog yields no valid combos");
        return Err(PlannerError::NoCandidates);
    }

    let schedule = match config.policy {
        FailurePolicy::Degrade => assign_greedy(&candidates, labeling, config, rng),
        FailurePolicy::Retry => assign_with_retry(&candidates, labeling, config, rng)?,
    };

    info!(
        policy = config.policy.as_str(),
        candidates = candidates.len(),
        populated = schedule.populated_count(),
        "generated schedule"
    );

    Ok(schedule)
}
