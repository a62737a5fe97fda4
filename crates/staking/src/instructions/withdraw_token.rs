//! Withdraw-token instruction

use crate::asset::FungibleAsset;
use crate::error::StakingError;
use crate::state::{Address, Env, StakingPool};

/// Move `amount` of `token` out of the pool's custody account to `to`
/// (owner only).
///
/// Works against any ledger the pool holds a balance in (the base asset's
/// reward reserve, or stray tokens sent to the pool) and is not gated by
/// `paused`. An insufficient balance surfaces as the ledger's own failure.
pub fn process_withdraw_token(
    pool: &StakingPool,
    token: &mut dyn FungibleAsset,
    env: &Env,
    to: Address,
    amount: u128,
) -> Result<(), StakingError> {
    if env.caller != pool.owner() {
        return Err(StakingError::WithdrawPermittedOwnerOnly);
    }

    token.transfer(&pool.pool_address(), &to, amount)?;

    log::info!("withdrew {} from the pool to {}", amount, to);
    Ok(())
}
