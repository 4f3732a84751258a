use anchor_lang::prelude::*;

pub const USER_STAKE_SEED: &str = "user_stake";

#[account]
#[derive(Default, Debug)]
pub struct UserStake {
    pub bump: u8,
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub amount: u64,
    /// Snapshot of the pool's accumulated-token-per-share index at the last
    /// interaction.
    pub reward_per_share_completed: u128,
    pub rewards_pending: u64,
    pub total_rewards_claimed: u64,
}

impl UserStake {
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 3 + 16;
}
