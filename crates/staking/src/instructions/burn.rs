//! Burn instruction

use crate::asset::FungibleAsset;
use crate::error::StakingError;
use crate::events::Event;
use crate::math;
use crate::state::{Address, Env, StakingPool};

/// Burn `amount` of the caller's shares and release the same number of
/// base-asset units from the pool to `to`.
pub fn process_burn(
    pool: &mut StakingPool,
    asset: &mut dyn FungibleAsset,
    env: &Env,
    to: Address,
    amount: u128,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;
    if amount == 0 {
        return Err(StakingError::NothingToBurn);
    }

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;

    let user = pool.user_info(&env.caller);
    let credited = user.pending_reward(reward_per_share)?;
    let new_amount = user
        .amount
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientShare)?;
    let new_debt = math::accrued(new_amount, reward_per_share)?;
    let new_total = pool
        .total_amount()
        .checked_sub(amount)
        .ok_or(StakingError::MathUnderflow)?;

    asset.transfer(&pool.pool_address(), &to, amount)?;

    pool.commit_accrual(reward_per_share, env.timestamp);
    let user = pool.user_entry(env.caller);
    user.accumulated_reward = credited;
    user.amount = new_amount;
    user.reward_debt = new_debt;
    pool.total_amount = new_total;
    pool.emit(Event::Transfer {
        from: env.caller,
        to: Address::ZERO,
        amount,
    });

    log::debug!("burned {} shares from {}, principal to {}", amount, env.caller, to);
    Ok(())
}
