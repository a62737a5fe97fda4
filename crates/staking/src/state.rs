//! Pool and holder state
//!
//! A single [`StakingPool`] value is the whole engine: configuration, the
//! reward accumulator, every holder record, and the share-token allowances.
//! It serializes with borsh so a host can persist it between transactions;
//! the transient event journal is excluded from serialization.

use std::collections::BTreeMap;
use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::asset::FungibleAsset;
use crate::error::StakingError;
use crate::events::Event;
use crate::math;

/// Default annual rate: 25.00% in basis points.
pub const DEFAULT_APR_BASIS_POINTS: u64 = 2_500;

/// Default minimum interval between harvests by one holder: 24 hours.
pub const DEFAULT_HARVEST_INTERVAL: u64 = 86_400;

/// Opaque 32-byte account identity supplied by the environment.
#[derive(
    BorshSerialize, BorshDeserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Mint/burn sentinel in share-token `Transfer` events.
    pub const ZERO: Address = Address([0u8; 32]);
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Ambient transaction environment: who is calling, and when.
#[derive(Clone, Copy, Debug)]
pub struct Env {
    pub caller: Address,
    /// Unix seconds.
    pub timestamp: i64,
}

impl Env {
    pub fn new(caller: Address, timestamp: i64) -> Self {
        Self { caller, timestamp }
    }
}

/// Per-holder stake record, materialized lazily on first mint or transfer in.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserInfo {
    /// Principal currently staked, in base-asset smallest units.
    pub amount: u128,
    /// `amount * ARPS / CALC_DECIMALS` at the last principal change; the
    /// subtraction baseline for rewards earned since.
    pub reward_debt: u128,
    /// Reward credited to the holder but not yet harvested.
    pub accumulated_reward: u128,
    /// Unix seconds of the last successful harvest; 0 before the first one.
    pub last_harvest_timestamp: i64,
}

impl UserInfo {
    /// Reward owed at the given per-share index: gross earnings on the
    /// current principal, minus the debt baseline, plus the credited backlog.
    pub fn pending_reward(&self, reward_per_share: u128) -> Result<u128, StakingError> {
        if self.amount == 0 {
            return Ok(self.accumulated_reward);
        }
        math::accrued(self.amount, reward_per_share)?
            .checked_sub(self.reward_debt)
            .ok_or(StakingError::MathUnderflow)?
            .checked_add(self.accumulated_reward)
            .ok_or(StakingError::MathOverflow)
    }
}

/// Staking pool state: one pool per base asset.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct StakingPool {
    pub(crate) owner: Address,
    /// Custody account of the pool in the base-asset ledger.
    pub(crate) address: Address,
    /// Mirrors the base asset's decimals; immutable after construction.
    pub(crate) decimals: u8,
    /// Sum of `amount` across all holders.
    pub(crate) total_amount: u128,
    pub(crate) apr_basis_points: u64,
    pub(crate) harvest_interval: u64,
    /// The reward accumulator (ARPS), scaled by `CALC_DECIMALS`. Written
    /// only by [`StakingPool::commit_accrual`].
    pub(crate) accumulated_reward_per_share: u128,
    pub(crate) last_reward_timestamp: i64,
    pub(crate) paused: bool,
    pub(crate) users: BTreeMap<Address, UserInfo>,
    /// Share-token allowances, keyed `(owner, spender)`.
    pub(crate) allowances: BTreeMap<(Address, Address), u128>,
    #[borsh(skip)]
    pub(crate) events: Vec<Event>,
}

impl StakingPool {
    /// Create a pool custodied at `address` in the base-asset ledger, owned
    /// by `owner`, with the accumulator anchored at `now`.
    pub fn new(asset: &dyn FungibleAsset, address: Address, owner: Address, now: i64) -> Self {
        Self {
            owner,
            address,
            decimals: asset.decimals(),
            total_amount: 0,
            apr_basis_points: DEFAULT_APR_BASIS_POINTS,
            harvest_interval: DEFAULT_HARVEST_INTERVAL,
            accumulated_reward_per_share: 0,
            last_reward_timestamp: now,
            paused: false,
            users: BTreeMap::new(),
            allowances: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Custody account of the pool in the base-asset ledger.
    pub fn pool_address(&self) -> Address {
        self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn total_amount(&self) -> u128 {
        self.total_amount
    }

    pub fn apr_basis_points(&self) -> u64 {
        self.apr_basis_points
    }

    pub fn harvest_interval(&self) -> u64 {
        self.harvest_interval
    }

    /// The committed per-share index. For the live value advanced to a
    /// timestamp, see [`StakingPool::reward_per_share_at`].
    pub fn accumulated_reward_per_share(&self) -> u128 {
        self.accumulated_reward_per_share
    }

    pub fn last_reward_timestamp(&self) -> i64 {
        self.last_reward_timestamp
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Holder record, zeroed when none has been materialized.
    pub fn user_info(&self, holder: &Address) -> UserInfo {
        self.users.get(holder).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// The per-share index advanced to `now` without committing: a pure read,
    /// so off-ledger observers see continuous accrual.
    ///
    /// While the pool is empty the index does not move (no one to reward),
    /// and a timestamp at or before the last update returns the committed
    /// value unchanged.
    pub fn reward_per_share_at(&self, now: i64) -> Result<u128, StakingError> {
        let elapsed = now.saturating_sub(self.last_reward_timestamp);
        if elapsed <= 0 || self.total_amount == 0 {
            return Ok(self.accumulated_reward_per_share);
        }
        let delta = math::reward_per_share_delta(elapsed as u64, self.apr_basis_points)?;
        self.accumulated_reward_per_share
            .checked_add(delta)
            .ok_or(StakingError::MathOverflow)
    }

    /// Commit a value obtained from [`StakingPool::reward_per_share_at`] and
    /// stamp `lastRewardTimestamp`. The only writer of either field after
    /// construction.
    pub(crate) fn commit_accrual(&mut self, reward_per_share: u128, now: i64) {
        self.accumulated_reward_per_share = reward_per_share;
        if now > self.last_reward_timestamp {
            self.last_reward_timestamp = now;
        }
    }

    /// Uncredited plus credited reward owed to `holder` at `now`.
    pub fn pending_reward(&self, holder: &Address, now: i64) -> Result<u128, StakingError> {
        let reward_per_share = self.reward_per_share_at(now)?;
        self.user_info(holder).pending_reward(reward_per_share)
    }

    /// Share-token balance: principal plus pending reward at `now`.
    pub fn balance_of(&self, holder: &Address, now: i64) -> Result<u128, StakingError> {
        let user = self.user_info(holder);
        let reward_per_share = self.reward_per_share_at(now)?;
        user.amount
            .checked_add(user.pending_reward(reward_per_share)?)
            .ok_or(StakingError::MathOverflow)
    }

    /// Total principal plus every holder's pending reward at `now`; equals
    /// the sum of [`StakingPool::balance_of`] over holders.
    pub fn total_supply(&self, now: i64) -> Result<u128, StakingError> {
        let reward_per_share = self.reward_per_share_at(now)?;
        let mut supply = self.total_amount;
        for user in self.users.values() {
            supply = supply
                .checked_add(user.pending_reward(reward_per_share)?)
                .ok_or(StakingError::MathOverflow)?;
        }
        Ok(supply)
    }

    pub(crate) fn ensure_not_paused(&self) -> Result<(), StakingError> {
        if self.paused {
            return Err(StakingError::ContractPaused);
        }
        Ok(())
    }

    pub(crate) fn ensure_owner(&self, caller: &Address) -> Result<(), StakingError> {
        if *caller != self.owner {
            return Err(StakingError::PermittedOwnerOnly);
        }
        Ok(())
    }

    /// Mutable holder record, materialized on first touch.
    pub(crate) fn user_entry(&mut self, holder: Address) -> &mut UserInfo {
        self.users.entry(holder).or_default()
    }

    pub(crate) fn emit(&mut self, event: Event) {
        log::trace!("event: {:?}", event);
        self.events.push(event);
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the event journal.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
