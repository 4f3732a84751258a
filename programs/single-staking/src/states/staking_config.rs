use anchor_lang::prelude::*;

pub const STAKING_CONFIG_SEED: &str = "staking_config";

#[account]
#[derive(Default, Debug)]
pub struct StakingConfig {
    pub bump: u8,
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    /// Shared vault all pools pay rewards from.
    pub reward_vault: Pubkey,
    /// Emission across all pools, in reward base units per slot.
    pub reward_per_slot: u64,
    /// Sum of the allocation points of every registered pool.
    pub total_alloc_point: u64,
    pub pool_count: u64,
}

impl StakingConfig {
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8 * 3;
}
