//! Fixed-point reward arithmetic
//!
//! The per-share index is scaled by `CALC_DECIMALS` (10^12). Every
//! multiplication runs before the corresponding division, on 256-bit
//! intermediates, so truncation happens exactly once per quantity.
//! All division is floor; there is no floating point anywhere.

use uint::construct_uint;

use crate::error::StakingError;

construct_uint! {
    /// 256-bit unsigned integer for large intermediate values
    pub struct U256(4);
}

/// Scale factor of `accumulatedRewardPerShare`: 10^12.
pub const CALC_DECIMALS: u128 = 1_000_000_000_000;

/// Basis-point divisor: `aprBasisPoints = 2500` means 25.00% per year.
pub const BASIS_POINTS_DIVISOR: u128 = 10_000;

/// Seconds in a Julian year (365.25 days).
pub const SECONDS_PER_YEAR: u128 = 31_557_600;

fn to_u128(value: U256) -> Result<u128, StakingError> {
    if value > U256::from(u128::MAX) {
        return Err(StakingError::MathOverflow);
    }
    Ok(value.as_u128())
}

/// Growth of the per-share index over `elapsed` seconds at the given annual
/// rate:
///
/// `CALC_DECIMALS * elapsed * apr_basis_points / BASIS_POINTS_DIVISOR /
/// SECONDS_PER_YEAR`
pub fn reward_per_share_delta(
    elapsed: u64,
    apr_basis_points: u64,
) -> Result<u128, StakingError> {
    let minted = U256::from(CALC_DECIMALS)
        .checked_mul(U256::from(elapsed))
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(U256::from(apr_basis_points))
        .ok_or(StakingError::MathOverflow)?
        / U256::from(BASIS_POINTS_DIVISOR)
        / U256::from(SECONDS_PER_YEAR);
    to_u128(minted)
}

/// `amount * reward_per_share / CALC_DECIMALS` on a 256-bit intermediate.
///
/// This is both the reward-debt baseline at a principal change and the
/// gross earnings term of the pending-reward formula; the product can exceed
/// 128 bits when both factors grow.
pub fn accrued(amount: u128, reward_per_share: u128) -> Result<u128, StakingError> {
    let value = U256::from(amount)
        .checked_mul(U256::from(reward_per_share))
        .ok_or(StakingError::MathOverflow)?
        / U256::from(CALC_DECIMALS);
    to_u128(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_at_default_apr() {
        // 10^12 * 86400 * 2500 / 10000 / 31_557_600, floor
        assert_eq!(reward_per_share_delta(86_400, 2_500).unwrap(), 684_462_696);
    }

    #[test]
    fn rate_table() {
        // (elapsed, apr) rows checked against plain left-to-right u128
        // evaluation of the same expression.
        for &(elapsed, apr, expected) in &[
            (100u64, 1_200u64, 380_257u128),
            (1_000, 7_500, 23_766_065),
            (5_000, 900, 14_259_639),
        ] {
            let straight = CALC_DECIMALS * elapsed as u128 * apr as u128
                / BASIS_POINTS_DIVISOR
                / SECONDS_PER_YEAR;
            assert_eq!(straight, expected);
            assert_eq!(reward_per_share_delta(elapsed, apr).unwrap(), expected);
        }
    }

    #[test]
    fn full_year_is_exact() {
        // Over exactly one year the index grows by apr * 10^8, with no
        // truncation loss.
        for apr in [1u64, 900, 1_200, 2_500, 7_500, 10_000] {
            assert_eq!(
                reward_per_share_delta(SECONDS_PER_YEAR as u64, apr).unwrap(),
                apr as u128 * 100_000_000
            );
        }
    }

    #[test]
    fn zero_inputs() {
        assert_eq!(reward_per_share_delta(0, 2_500).unwrap(), 0);
        assert_eq!(reward_per_share_delta(86_400, 0).unwrap(), 0);
        assert_eq!(accrued(0, 684_462_696).unwrap(), 0);
        assert_eq!(accrued(974_426_000_000, 0).unwrap(), 0);
    }

    #[test]
    fn accrued_truncates_down() {
        // 974_426_000_000 * 684_462_696 / 10^12, floor
        let expected = 974_426_000_000u128 * 684_462_696 / CALC_DECIMALS;
        assert_eq!(accrued(974_426_000_000, 684_462_696).unwrap(), expected);
    }

    #[test]
    fn accrued_survives_wide_products() {
        // amount * reward_per_share overflows 128 bits; the quotient fits.
        assert_eq!(accrued(u128::MAX, CALC_DECIMALS).unwrap(), u128::MAX);
        // ... and when the quotient itself does not fit, that is an error,
        // not a wrap.
        assert_eq!(
            accrued(u128::MAX, 2 * CALC_DECIMALS),
            Err(StakingError::MathOverflow)
        );
    }

    #[test]
    fn delta_is_monotone_in_time() {
        let mut last = 0;
        for elapsed in [0u64, 1, 59, 3_600, 86_400, 2_592_000] {
            let delta = reward_per_share_delta(elapsed, 2_500).unwrap();
            assert!(delta >= last);
            last = delta;
        }
    }
}
