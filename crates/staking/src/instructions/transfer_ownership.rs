//! Transfer-ownership instruction

use crate::error::StakingError;
use crate::state::{Address, Env, StakingPool};

/// Hand the pool to a new owner (owner only).
pub fn process_transfer_ownership(
    pool: &mut StakingPool,
    env: &Env,
    new_owner: Address,
) -> Result<(), StakingError> {
    pool.ensure_owner(&env.caller)?;

    pool.owner = new_owner;

    log::info!("ownership transferred to {}", new_owner);
    Ok(())
}
