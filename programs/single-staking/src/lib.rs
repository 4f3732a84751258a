use anchor_lang::prelude::*;

declare_id!("GSEnbRPqfKCkhMLfd4HjPxdNPYkQPgQe2tbHtrgAdayC");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("B8VmoTgg2arRfw7qQVTYK9GohYeyMEjaCSW6jVPVBUgV");
}

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Single Staking",
    project_url: "https://github.com/centrifuge-labs/staking-vaults",
    contacts: "email:security@centrifuge-labs.io",
    policy: "https://github.com/centrifuge-labs/staking-vaults/blob/main/SECURITY.md"
}

pub const AUTH_SEED: &str = "staking_auth";
pub const REWARD_VAULT_SEED: &str = "reward_vault";
pub const STAKE_VAULT_SEED: &str = "stake_vault";

/// Scaling factor for the accumulated-token-per-share index.
pub const PRECISION: u128 = 1_000_000_000;

pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod single_staking {

    use super::*;

    pub fn initialize(ctx: Context<Initialize>, staking_admin: Pubkey, reward_per_slot: u64) -> Result<()> {
        instructions::initialize(ctx, staking_admin, reward_per_slot)
    }

    pub fn initiate_pool(
        ctx: Context<InitiatePool>,
        alloc_point: u64,
        total_reward_amount: u64,
    ) -> Result<()> {
        instructions::initiate_pool(ctx, alloc_point, total_reward_amount)
    }

    pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
        instructions::update_pool(ctx)
    }

    pub fn add_stake(ctx: Context<AddStake>, amount: u64) -> Result<()> {
        instructions::add_stake(ctx, amount)
    }

    pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        instructions::withdraw_stake(ctx, amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards(ctx)
    }
}
