//! Graviton staking pool: stake GTON, accrue APR-denominated rewards.
//!
//! Holders deposit a fungible base asset into a shared pool and earn yield
//! at a configurable annual rate. The pool doubles as a derived share token:
//! a holder's balance is their staked principal plus the reward accrued to
//! them so far, so balances grow continuously between transactions.
//!
//! Accrual is O(1) in the number of holders. Time times rate folds into a
//! single per-share index (`accumulatedRewardPerShare`, scaled by 10^12);
//! each holder's cut is realized lazily against a `rewardDebt` baseline the
//! next time their principal is touched or they harvest.
//!
//! The engine is pure bookkeeping. Custody moves through the
//! [`asset::FungibleAsset`] ledger trait, and caller identity plus the
//! current timestamp arrive per call in a [`state::Env`], so hosts and tests
//! substitute their own ledger and clock.

use borsh::{BorshDeserialize, BorshSerialize};

pub mod asset;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod state;

use asset::FungibleAsset;
use error::StakingError;
use instructions::*;
use state::{Address, Env, StakingPool};

/// Pool operations
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub enum StakingInstruction {
    /// Deposit `amount` base-asset units pulled from the caller; mint the
    /// same number of shares to `to`.
    Mint { amount: u128, to: Address },

    /// Burn `amount` of the caller's shares; release the principal to `to`.
    Burn { to: Address, amount: u128 },

    /// Pay out `amount` of the caller's accrued reward.
    Harvest { amount: u128 },

    /// Move `amount` of principal from the caller to `to`.
    Transfer { to: Address, amount: u128 },

    /// Set the caller's share-token allowance for `spender`.
    Approve { spender: Address, amount: u128 },

    /// Spend the caller's allowance to move principal from `from` to `to`.
    TransferFrom {
        from: Address,
        to: Address,
        amount: u128,
    },

    /// Commit pending accrual to the reward accumulator.
    UpdateRewardPool,

    /// Set the annual rate in basis points (owner only).
    SetApr { apr_basis_points: u64 },

    /// Set the minimum seconds between harvests (owner only).
    SetHarvestInterval { seconds: u64 },

    /// Flip the pause flag (owner only).
    TogglePause,

    /// Hand the pool to a new owner (owner only).
    TransferOwnership { new_owner: Address },

    /// Rescue `amount` of the supplied ledger's pool-held balance (owner
    /// only, available while paused).
    WithdrawToken { to: Address, amount: u128 },
}

/// Execute one instruction against the pool.
///
/// `asset` is the base-asset ledger for custody movements. For
/// `WithdrawToken` the same handle is the ledger being rescued from; call
/// [`instructions::process_withdraw_token`] directly to rescue a different
/// token. An operation either commits all of its effects or fails and
/// commits none.
pub fn process_instruction(
    pool: &mut StakingPool,
    asset: &mut dyn FungibleAsset,
    env: &Env,
    instruction: StakingInstruction,
) -> Result<(), StakingError> {
    match instruction {
        StakingInstruction::Mint { amount, to } => {
            log::debug!("instruction: Mint (amount={}, to={})", amount, to);
            process_mint(pool, asset, env, amount, to)
        }
        StakingInstruction::Burn { to, amount } => {
            log::debug!("instruction: Burn (to={}, amount={})", to, amount);
            process_burn(pool, asset, env, to, amount)
        }
        StakingInstruction::Harvest { amount } => {
            log::debug!("instruction: Harvest (amount={})", amount);
            process_harvest(pool, asset, env, amount)
        }
        StakingInstruction::Transfer { to, amount } => {
            log::debug!("instruction: Transfer (to={}, amount={})", to, amount);
            process_transfer(pool, env, to, amount)
        }
        StakingInstruction::Approve { spender, amount } => {
            log::debug!("instruction: Approve (spender={}, amount={})", spender, amount);
            process_approve(pool, env, spender, amount)
        }
        StakingInstruction::TransferFrom { from, to, amount } => {
            log::debug!(
                "instruction: TransferFrom (from={}, to={}, amount={})",
                from,
                to,
                amount
            );
            process_transfer_from(pool, env, from, to, amount)
        }
        StakingInstruction::UpdateRewardPool => {
            log::debug!("instruction: UpdateRewardPool");
            process_update_reward_pool(pool, env)
        }
        StakingInstruction::SetApr { apr_basis_points } => {
            log::debug!("instruction: SetApr (bp={})", apr_basis_points);
            process_set_apr(pool, env, apr_basis_points)
        }
        StakingInstruction::SetHarvestInterval { seconds } => {
            log::debug!("instruction: SetHarvestInterval (seconds={})", seconds);
            process_set_harvest_interval(pool, env, seconds)
        }
        StakingInstruction::TogglePause => {
            log::debug!("instruction: TogglePause");
            process_toggle_pause(pool, env)
        }
        StakingInstruction::TransferOwnership { new_owner } => {
            log::debug!("instruction: TransferOwnership (new_owner={})", new_owner);
            process_transfer_ownership(pool, env, new_owner)
        }
        StakingInstruction::WithdrawToken { to, amount } => {
            log::debug!("instruction: WithdrawToken (to={}, amount={})", to, amount);
            process_withdraw_token(pool, asset, env, to, amount)
        }
    }
}
