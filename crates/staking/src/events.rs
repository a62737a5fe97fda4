//! Share-token observability events

use crate::state::Address;

/// Events recorded by the share-token surface and drained by the host via
/// [`StakingPool::take_events`]. [`Address::ZERO`] marks the minted-from /
/// burned-to side of a `Transfer`; `harvest` records nothing because
/// principal is untouched.
///
/// [`StakingPool::take_events`]: crate::state::StakingPool::take_events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Transfer {
        from: Address,
        to: Address,
        amount: u128,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: u128,
    },
}
