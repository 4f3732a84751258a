use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("B8VmoTgg2arRfw7qQVTYK9GohYeyMEjaCSW6jVPVBUgV");
}

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Ticket Vault",
    project_url: "https://github.com/centrifuge-labs/staking-vaults",
    contacts: "email:security@centrifuge-labs.io",
    policy: "https://github.com/centrifuge-labs/staking-vaults/blob/main/SECURITY.md"
}

pub const AUTH_SEED: &str = "vault_auth";
pub const TOKEN_VAULT_SEED: &str = "token_vault";

/// Scaling factor for the accumulated-reward-per-share index.
pub const PRECISION: u128 = 1_000_000_000;

/// Fee rates are expressed in basis points against this denominator.
pub const FEE_RATE_DENOMINATOR_VALUE: u64 = 10_000;

/// Default length of the staking phase, in seconds (13 weeks).
pub const DEFAULT_STAKING_PERIOD: u64 = 7_862_400;

/// Default early-exit penalty, in basis points (7%).
pub const DEFAULT_WITHDRAW_FEE_RATE: u64 = 700;

pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;

use instructions::*;

#[program]
pub mod ticket_vault {

    use super::*;

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        vault_admin: Pubkey,
        staking_period: u64,
        withdraw_fee_rate: u64,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, vault_admin, staking_period, withdraw_fee_rate)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn add_rewards(ctx: Context<AddRewards>, amount: u64) -> Result<()> {
        instructions::add_rewards(ctx, amount)
    }

    pub fn start_staking(ctx: Context<StartStaking>) -> Result<()> {
        instructions::start_staking(ctx)
    }

    pub fn stop_staking(ctx: Context<StopStaking>) -> Result<()> {
        instructions::stop_staking(ctx)
    }

    pub fn update_vault(ctx: Context<UpdateVault>) -> Result<()> {
        instructions::update_vault(ctx)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    pub fn exit_while_collecting(ctx: Context<ExitPosition>) -> Result<()> {
        instructions::exit_while_collecting(ctx)
    }

    pub fn exit_while_staking(ctx: Context<ExitPosition>) -> Result<()> {
        instructions::exit_while_staking(ctx)
    }
}
