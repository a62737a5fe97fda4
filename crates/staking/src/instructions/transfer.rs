//! Transfer instructions
//!
//! Share-token transfers move *principal only*. The live balance includes
//! pending reward, but the sender check compares against principal: a holder
//! with pending reward and zero principal cannot transfer. Both parties'
//! pending is credited at the fresh index before the move, so accrual up to
//! this instant stays with whoever earned it.

use crate::error::StakingError;
use crate::events::Event;
use crate::math;
use crate::state::{Address, Env, StakingPool, UserInfo};

/// Staged writes of a principal move. [`plan_move`] does every fallible
/// step; [`apply_move`] cannot fail.
struct MovePlan {
    sender: UserInfo,
    /// `None` for a self-transfer, where the sender record already carries
    /// the whole outcome.
    receiver: Option<UserInfo>,
}

fn plan_move(
    pool: &StakingPool,
    reward_per_share: u128,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<MovePlan, StakingError> {
    let sender = pool.user_info(from);
    let sender_credited = sender.pending_reward(reward_per_share)?;
    let sender_amount = sender
        .amount
        .checked_sub(amount)
        .ok_or(StakingError::TransferExceedsBalance)?;

    if from == to {
        // Principal is unchanged; pending is still realized.
        return Ok(MovePlan {
            sender: UserInfo {
                amount: sender.amount,
                reward_debt: math::accrued(sender.amount, reward_per_share)?,
                accumulated_reward: sender_credited,
                last_harvest_timestamp: sender.last_harvest_timestamp,
            },
            receiver: None,
        });
    }

    let receiver = pool.user_info(to);
    let receiver_credited = receiver.pending_reward(reward_per_share)?;
    let receiver_amount = receiver
        .amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    Ok(MovePlan {
        sender: UserInfo {
            amount: sender_amount,
            reward_debt: math::accrued(sender_amount, reward_per_share)?,
            accumulated_reward: sender_credited,
            last_harvest_timestamp: sender.last_harvest_timestamp,
        },
        receiver: Some(UserInfo {
            amount: receiver_amount,
            reward_debt: math::accrued(receiver_amount, reward_per_share)?,
            accumulated_reward: receiver_credited,
            last_harvest_timestamp: receiver.last_harvest_timestamp,
        }),
    })
}

fn apply_move(pool: &mut StakingPool, plan: MovePlan, from: Address, to: Address, amount: u128) {
    *pool.user_entry(from) = plan.sender;
    if let Some(receiver) = plan.receiver {
        *pool.user_entry(to) = receiver;
    }
    // `totalAmount` is unchanged: principal only moved between holders.
    pool.emit(Event::Transfer { from, to, amount });
}

/// Move `amount` of principal from the caller to `to`.
pub fn process_transfer(
    pool: &mut StakingPool,
    env: &Env,
    to: Address,
    amount: u128,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;
    let plan = plan_move(pool, reward_per_share, &env.caller, &to, amount)?;

    pool.commit_accrual(reward_per_share, env.timestamp);
    apply_move(pool, plan, env.caller, to, amount);

    log::debug!("transferred {} shares: {} -> {}", amount, env.caller, to);
    Ok(())
}

/// Spend the caller's allowance to move `amount` of principal from `from`
/// to `to`.
pub fn process_transfer_from(
    pool: &mut StakingPool,
    env: &Env,
    from: Address,
    to: Address,
    amount: u128,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;

    let reward_per_share = pool.reward_per_share_at(env.timestamp)?;
    let plan = plan_move(pool, reward_per_share, &from, &to, amount)?;
    let remaining = pool
        .allowance(&from, &env.caller)
        .checked_sub(amount)
        .ok_or(StakingError::TransferExceedsAllowance)?;

    pool.commit_accrual(reward_per_share, env.timestamp);
    pool.allowances.insert((from, env.caller), remaining);
    apply_move(pool, plan, from, to, amount);

    log::debug!(
        "transferred {} shares: {} -> {} (spender {})",
        amount,
        from,
        to,
        env.caller
    );
    Ok(())
}
