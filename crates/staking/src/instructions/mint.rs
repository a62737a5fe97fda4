//! Mint instruction

use crate::asset::FungibleAsset;
use crate::error::StakingError;
use crate::events::Event;
use crate::math;
use crate::state::{Address, Env, StakingPool};

/// Deposit `amount` base-asset units pulled from the caller and mint the
/// same number of shares to `to`.
///
/// Reward pending to `to` is credited at the fresh index before the
/// principal changes; the debt baseline is then recomputed on the new
/// amount.
pub fn process_mint(
    pool: &mut StakingPool,
    asset: &mut dyn FungibleAsset,
    env: &Env,
    amount: u128,
    to: Address,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;
    if amount == 0 {
        return Err(StakingError::NothingToDeposit);
    }

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;

    // Every fallible step runs before the ledger pull; a failure on either
    // side leaves pool and ledger both untouched.
    let user = pool.user_info(&to);
    let credited = user.pending_reward(reward_per_share)?;
    let new_amount = user
        .amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    let new_debt = math::accrued(new_amount, reward_per_share)?;
    let new_total = pool
        .total_amount()
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    let pool_address = pool.pool_address();
    asset.transfer_from(&pool_address, &env.caller, &pool_address, amount)?;

    pool.commit_accrual(reward_per_share, env.timestamp);
    let user = pool.user_entry(to);
    user.accumulated_reward = credited;
    user.amount = new_amount;
    user.reward_debt = new_debt;
    pool.total_amount = new_total;
    pool.emit(Event::Transfer {
        from: Address::ZERO,
        to,
        amount,
    });

    log::debug!("minted {} shares to {}", amount, to);
    Ok(())
}
