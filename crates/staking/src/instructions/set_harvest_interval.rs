//! Set-harvest-interval instruction

use crate::error::StakingError;
use crate::state::{Env, StakingPool};

/// Set the minimum interval between harvests by one holder (owner only).
pub fn process_set_harvest_interval(
    pool: &mut StakingPool,
    env: &Env,
    seconds: u64,
) -> Result<(), StakingError> {
    pool.ensure_owner(&env.caller)?;

    pool.harvest_interval = seconds;

    log::info!("harvest interval set to {} s", seconds);
    Ok(())
}
