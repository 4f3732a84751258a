use anchor_lang::prelude::*;

/// Emitted when the admin registers a new staking pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PoolInitialized {
    pub index: u64,
    pub stake_mint: Pubkey,
    pub alloc_point: u64,
    /// Reward budget committed to this pool (base units).
    pub total_reward_amount: u64,
}

/// Emitted when a user stakes tokens into a pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakedToPool {
    pub account: Pubkey,
    pub pool_index: u64,
    pub amount: u64,
}

/// Emitted when a user withdraws staked tokens from a pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdraw {
    pub account: Pubkey,
    pub pool_index: u64,
    pub amount: u64,
}

/// Emitted whenever settled rewards are paid out, whether through an explicit
/// claim or alongside a stake movement.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsClaimed {
    pub account: Pubkey,
    pub pool_index: u64,
    pub reward: u64,
}
