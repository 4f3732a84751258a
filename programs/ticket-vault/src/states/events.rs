use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track vault state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the vault is initialized.
///
/// Captures the critical addresses and tunable parameters at genesis so
/// indexers/frontends can cache vault settings without re-reading accounts.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct VaultInitialized {
    /// Vault admin pubkey (may later be updated).
    pub admin: Pubkey,
    /// Mint of the staked token.
    pub stake_mint: Pubkey,
    /// Program-owned token vault holding principal and rewards.
    pub token_vault: Pubkey,
    /// Token account receiving early-exit fees.
    pub fee_token_account: Pubkey,
    /// Length of the staking phase, in seconds.
    pub staking_period: u64,
    /// Early-exit penalty in basis points.
    pub withdraw_fee_rate: u64,
}

/// Emitted whenever configuration parameters are modified via `update_config`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigUpdated {
    /// Current admin (may be the same or newly set).
    pub admin: Pubkey,
    /// Current fee receiver.
    pub fee_token_account: Pubkey,
    /// Current early-exit penalty in basis points.
    pub withdraw_fee_rate: u64,
}

/// Emitted when the admin commits additional reward tokens to the pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsAdded {
    /// Reward tokens transferred in (base units).
    pub amount: u64,
    /// Total committed rewards after this addition.
    pub total_vault_rewards: u64,
}

/// Emitted on the `Collecting → Staking` transition.
///
/// The emission schedule is fixed at this moment and never changes afterwards.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakingStarted {
    /// Timestamp accrual starts from.
    pub start_timestamp: u64,
    /// Timestamp accrual is bounded by.
    pub stop_timestamp: u64,
    /// Fixed emission rate (base units per second).
    pub reward_rate: u64,
}

/// Emitted on the `Staking → Completed` transition.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct StakingStopped {
    /// Final accrual bound (may precede the scheduled stop on an early stop).
    pub stop_timestamp: u64,
    /// Committed rewards that were never emitted.
    pub remaining_vault_rewards: u64,
}

/// Emitted when a user deposits principal into the vault.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Deposit {
    /// The depositing user.
    pub account: Pubkey,
    /// Principal transferred in (base units); shares are minted 1:1.
    pub amount: u64,
}

/// Emitted when a user claims accrued rewards, leaving principal staked.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsClaimed {
    /// The claiming user.
    pub account: Pubkey,
    /// Reward paid out (base units).
    pub reward: u64,
}

/// Emitted when a user withdraws after the vault completed.
///
/// Encodes the principal/reward breakdown for auditing/analytics.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Withdraw {
    /// The withdrawing user.
    pub account: Pubkey,
    /// Principal returned (base units).
    pub amount: u64,
    /// Reward settled and paid alongside the principal (base units).
    pub reward: u64,
}

/// Emitted when a user exits early, during `Collecting` or `Staking`.
///
/// Includes the penalty routed to the fee account so the full
/// `payout + fee == principal` split is reconstructable off-chain.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ExitWithFees {
    /// The exiting user.
    pub account: Pubkey,
    /// Principal paid back to the user after the fee (base units).
    pub amount: u64,
    /// Penalty transferred to the fee account (base units).
    pub fee: u64,
    /// Reward settled and paid out, zero while collecting (base units).
    pub reward: u64,
}
