//! Operation handlers for the staking pool

pub mod approve;
pub mod burn;
pub mod harvest;
pub mod mint;
pub mod set_apr;
pub mod set_harvest_interval;
pub mod toggle_pause;
pub mod transfer;
pub mod transfer_ownership;
pub mod update_pool;
pub mod withdraw_token;

pub use approve::*;
pub use burn::*;
pub use harvest::*;
pub use mint::*;
pub use set_apr::*;
pub use set_harvest_interval::*;
pub use toggle_pause::*;
pub use transfer::*;
pub use transfer_ownership::*;
pub use update_pool::*;
pub use withdraw_token::*;
