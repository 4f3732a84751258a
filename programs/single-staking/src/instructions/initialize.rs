use crate::error::ErrorCode;
use crate::states::*;
use crate::{AUTH_SEED, REWARD_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer signer (must match program-level admin id)
    #[account(
        mut,
        constraint = owner.key() == crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// CHECK: Authority PDA owning the vaults
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [STAKING_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = StakingConfig::LEN
    )]
    pub staking_config: Account<'info, StakingConfig>,

    #[account(mint::token_program = token_program)]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Shared reward vault all pools pay from
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = reward_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    staking_admin: Pubkey,
    reward_per_slot: u64,
) -> Result<()> {
    require_keys_neq!(staking_admin, Pubkey::default());
    require_gt!(reward_per_slot, 0, ErrorCode::ZeroAmount);

    let staking_config = ctx.accounts.staking_config.deref_mut();
    staking_config.bump = ctx.bumps.staking_config;
    staking_config.admin = staking_admin;
    staking_config.reward_mint = ctx.accounts.reward_mint.key();
    staking_config.reward_vault = ctx.accounts.reward_vault.key();
    staking_config.reward_per_slot = reward_per_slot;
    msg!("Staking config initialized");
    Ok(())
}
