//! Set-APR instruction

use crate::error::StakingError;
use crate::state::{Env, StakingPool};

/// Set the annual rate in basis points (owner only).
///
/// No accrual is folded here: time elapsed since the last committed update
/// is priced at the new rate when next committed.
pub fn process_set_apr(
    pool: &mut StakingPool,
    env: &Env,
    apr_basis_points: u64,
) -> Result<(), StakingError> {
    pool.ensure_owner(&env.caller)?;

    pool.apr_basis_points = apr_basis_points;

    log::info!("apr set to {} bp", apr_basis_points);
    Ok(())
}
