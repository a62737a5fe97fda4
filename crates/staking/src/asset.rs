//! Base-asset ledger seam
//!
//! The pool never holds GTON itself; custody lives in an external fungible
//! token ledger reached through [`FungibleAsset`]. [`InMemoryToken`] is a
//! reference implementation used by the test suite and by hosts that embed
//! the engine without a real ledger.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::state::Address;

/// Failures raised by a base-asset ledger. The engine propagates these
/// verbatim; the strings follow the ERC20 convention of the original GTON
/// token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance,

    #[error("ERC20: transfer amount exceeds allowance")]
    InsufficientAllowance,

    #[error("ERC20: balance overflow")]
    BalanceOverflow,
}

/// External fungible-token ledger the pool moves custody through.
///
/// Calls either apply completely or fail without effect; the engine relies
/// on that to keep its own commits atomic.
pub trait FungibleAsset {
    fn decimals(&self) -> u8;

    fn balance_of(&self, owner: &Address) -> u128;

    fn allowance(&self, owner: &Address, spender: &Address) -> u128;

    /// Overwrite `owner`'s allowance for `spender`.
    fn approve(&mut self, owner: &Address, spender: &Address, amount: u128);

    /// Move `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Address, to: &Address, amount: u128)
        -> Result<(), AssetError>;

    /// Move `amount` from `from` to `to` on the authority of `spender`,
    /// consuming `allowance[from][spender]`.
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), AssetError>;
}

/// ERC20-style ledger held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryToken {
    decimals: u8,
    balances: BTreeMap<Address, u128>,
    allowances: BTreeMap<(Address, Address), u128>,
}

impl InMemoryToken {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
        }
    }

    /// Issue `amount` new units to `to`. Ledger administration, outside the
    /// [`FungibleAsset`] surface; tests use it to seed balances and reward
    /// reserves.
    pub fn mint(&mut self, to: &Address, amount: u128) {
        let balance = self.balances.entry(*to).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Sum of all balances.
    pub fn total_issued(&self) -> u128 {
        self.balances.values().sum()
    }

    fn move_balance(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), AssetError> {
        let from_balance = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientBalance)?;
        let to_balance = if from == to {
            from_balance
        } else {
            self.balance_of(to)
                .checked_add(amount)
                .ok_or(AssetError::BalanceOverflow)?
        };
        self.balances.insert(*from, from_balance);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

impl FungibleAsset for InMemoryToken {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn balance_of(&self, owner: &Address) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    fn approve(&mut self, owner: &Address, spender: &Address, amount: u128) {
        self.allowances.insert((*owner, *spender), amount);
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), AssetError> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), AssetError> {
        // Both checks run before either write so a failure mutates nothing.
        let remaining = self
            .allowance(from, spender)
            .checked_sub(amount)
            .ok_or(AssetError::InsufficientAllowance)?;
        self.move_balance(from, to, amount)?;
        self.allowances.insert((*from, *spender), remaining);
        Ok(())
    }
}
