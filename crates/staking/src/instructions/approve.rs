//! Approve instruction

use crate::error::StakingError;
use crate::events::Event;
use crate::state::{Address, Env, StakingPool};

/// Overwrite the caller's share-token allowance for `spender`.
pub fn process_approve(
    pool: &mut StakingPool,
    env: &Env,
    spender: Address,
    amount: u128,
) -> Result<(), StakingError> {
    pool.ensure_not_paused()?;

    pool.allowances.insert((env.caller, spender), amount);
    pool.emit(Event::Approval {
        owner: env.caller,
        spender,
        amount,
    });

    log::debug!("approved {} shares: {} -> {}", amount, env.caller, spender);
    Ok(())
}
