use anchor_lang::prelude::*;

pub const USER_INFO_SEED: &str = "user_info";

#[account]
#[derive(Default, Debug)]
pub struct UserInfo {
    pub bump: u8,
    pub owner: Pubkey,
    /// Share balance; shares are minted 1:1 against deposited principal.
    pub total_staked: u64,
    /// Reward-debt snapshot of the vault's accumulated-reward-per-share
    /// index, taken at the user's last interaction.
    pub reward_per_share_completed: u128,
    /// Rewards settled to this user but not yet paid out.
    pub rewards_pending: u64,
    pub total_rewards_claimed: u64,
}

impl UserInfo {
    pub const LEN: usize = 8 + 1 + 32 + 8 * 3 + 16;
}
