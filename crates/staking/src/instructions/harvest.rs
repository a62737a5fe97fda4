//! Harvest instruction

use crate::asset::FungibleAsset;
use crate::error::StakingError;
use crate::math;
use crate::state::{Env, StakingPool};

/// Pay out `amount` of the caller's accrued reward in base-asset units.
///
/// Payouts draw on the pool's base-asset reserve, which is topped up out of
/// band; a shortfall surfaces as the ledger's own failure and rolls the
/// harvest back. Principal is untouched, so no share-token transfer is
/// recorded.
pub fn process_harvest(
    pool: &mut StakingPool,
    asset: &mut dyn FungibleAsset,
    env: &Env,
    amount: u128,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;
    if amount == 0 {
        return Err(StakingError::NothingToHarvest);
    }

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;

    let user = pool.user_info(&env.caller);
    let pending = user.pending_reward(reward_per_share)?;
    let remainder = pending
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientToHarvest)?;

    // The cooldown is keyed on the harvester, wherever the funds go.
    if user.last_harvest_timestamp != 0
        && env.timestamp.saturating_sub(user.last_harvest_timestamp)
            < pool.harvest_interval() as i64
    {
        return Err(StakingError::HarvestTooEarly);
    }

    let new_debt = math::accrued(user.amount, reward_per_share)?;

    asset.transfer(&pool.pool_address(), &env.caller, amount)?;

    pool.commit_accrual(reward_per_share, env.timestamp);
    let user = pool.user_entry(env.caller);
    user.accumulated_reward = remainder;
    user.reward_debt = new_debt;
    user.last_harvest_timestamp = env.timestamp;

    log::debug!("harvested {} to {}", amount, env.caller);
    Ok(())
}
