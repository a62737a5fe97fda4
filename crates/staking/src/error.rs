use thiserror::Error;

use crate::asset::AssetError;

/// Terminal failures of a pool operation. Each operation either commits all
/// of its effects or fails with one of these and commits none.
///
/// The message strings are a stable interface: callers and tests match on
/// them verbatim, including the trailing period on [`PermittedOwnerOnly`]
/// that [`WithdrawPermittedOwnerOnly`] lacks.
///
/// [`PermittedOwnerOnly`]: StakingError::PermittedOwnerOnly
/// [`WithdrawPermittedOwnerOnly`]: StakingError::WithdrawPermittedOwnerOnly
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingError {
    #[error("Staking: contract paused.")]
    ContractPaused,

    #[error("Staking: Nothing to deposit")]
    NothingToDeposit,

    #[error("Staking: Nothing to burn")]
    NothingToBurn,

    #[error("Staking: Insufficient share")]
    InsufficientShare,

    #[error("Staking: Nothing to harvest")]
    NothingToHarvest,

    #[error("Staking: Insufficient to harvest")]
    InsufficientToHarvest,

    #[error("Staking: less than 24 hours since last harvest")]
    HarvestTooEarly,

    #[error("Staking: permitted to owner only.")]
    PermittedOwnerOnly,

    #[error("Staking: permitted to owner only")]
    WithdrawPermittedOwnerOnly,

    #[error("ERC20: transfer amount exceeds balance")]
    TransferExceedsBalance,

    #[error("ERC20: transfer amount exceeds allowance")]
    TransferExceedsAllowance,

    #[error("Math overflow")]
    MathOverflow,

    #[error("Math underflow")]
    MathUnderflow,

    /// Failure propagated verbatim from the base-asset ledger.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_strings_are_stable() {
        assert_eq!(
            StakingError::ContractPaused.to_string(),
            "Staking: contract paused."
        );
        assert_eq!(
            StakingError::NothingToDeposit.to_string(),
            "Staking: Nothing to deposit"
        );
        assert_eq!(
            StakingError::NothingToBurn.to_string(),
            "Staking: Nothing to burn"
        );
        assert_eq!(
            StakingError::InsufficientShare.to_string(),
            "Staking: Insufficient share"
        );
        assert_eq!(
            StakingError::NothingToHarvest.to_string(),
            "Staking: Nothing to harvest"
        );
        assert_eq!(
            StakingError::InsufficientToHarvest.to_string(),
            "Staking: Insufficient to harvest"
        );
        assert_eq!(
            StakingError::HarvestTooEarly.to_string(),
            "Staking: less than 24 hours since last harvest"
        );
        // Note the period on the config guard and its absence on the
        // withdraw guard.
        assert_eq!(
            StakingError::PermittedOwnerOnly.to_string(),
            "Staking: permitted to owner only."
        );
        assert_eq!(
            StakingError::WithdrawPermittedOwnerOnly.to_string(),
            "Staking: permitted to owner only"
        );
        assert_eq!(
            StakingError::TransferExceedsBalance.to_string(),
            "ERC20: transfer amount exceeds balance"
        );
        assert_eq!(
            StakingError::TransferExceedsAllowance.to_string(),
            "ERC20: transfer amount exceeds allowance"
        );
    }

    #[test]
    fn asset_errors_propagate_verbatim() {
        let err: StakingError = AssetError::InsufficientAllowance.into();
        assert_eq!(err.to_string(), "ERC20: transfer amount exceeds allowance");
    }
}
