//! Update reward pool instruction

use crate::error::StakingError;
use crate::state::{Env, StakingPool};

/// Advance the per-share index to the current timestamp and stamp
/// `lastRewardTimestamp`.
///
/// Idempotent within a single timestamp, and a no-op on the index while the
/// pool is empty. Every other mutator performs the same advance as its first
/// step, so calling this explicitly only matters for observers who want the
/// committed index to be fresh.
pub fn process_update_reward_pool(
    pool: &mut StakingPool,
    env: &Env,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;
    pool.commit_accrual(reward_per_share, env.timestamp);

    log::debug!(
        "reward pool updated: per-share index {} at {}",
        reward_per_share,
        env.timestamp
    );
    Ok(())
}
