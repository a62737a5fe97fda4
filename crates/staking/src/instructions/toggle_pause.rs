//! Toggle-pause instruction

use crate::error::StakingError;
use crate::state::{Env, StakingPool};

/// Flip the pause flag (owner only).
///
/// While paused, every user-facing mutator is rejected; configuration,
/// ownership transfer, and token rescue stay available.
pub fn process_toggle_pause(pool: &mut StakingPool, env: &Env) -> Result<(), StakingError> {
    pool.ensure_owner(&env.caller)?;

    pool.paused = !pool.paused;

    log::info!("pool {}", if pool.paused { "paused" } else { "unpaused" });
    Ok(())
}
