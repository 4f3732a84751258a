use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{current_slot, transfer_from_user_to_pool_vault};
use crate::{AUTH_SEED, STAKE_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

#[derive(Accounts)]
pub struct InitiatePool<'info> {
    #[account(
        mut,
        constraint = owner.key() == staking_config.admin @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// CHECK: Authority PDA owning the vaults
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [STAKING_CONFIG_SEED.as_bytes()],
        bump = staking_config.bump,
    )]
    pub staking_config: Account<'info, StakingConfig>,

    #[account(
        init,
        seeds = [
            POOL_SEED.as_bytes(),
            &staking_config.pool_count.to_le_bytes()
        ],
        bump,
        payer = owner,
        space = PoolState::LEN
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(mint::token_program = token_program)]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = staking_config.reward_mint @ ErrorCode::InvalidRewardMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool-owned vault for the staked token
    #[account(
        init,
        seeds = [
            STAKE_VAULT_SEED.as_bytes(),
            &staking_config.pool_count.to_le_bytes()
        ],
        bump,
        payer = owner,
        token::mint = stake_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = staking_config.reward_vault @ ErrorCode::InvalidVault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Register a new pool: commit its reward budget to the shared vault and add
/// its allocation points to the emission split.
pub fn initiate_pool(
    ctx: Context<InitiatePool>,
    alloc_point: u64,
    total_reward_amount: u64,
) -> Result<()> {
    require_gt!(alloc_point, 0, ErrorCode::ZeroAllocPoint);
    require_gt!(total_reward_amount, 0, ErrorCode::ZeroAmount);

    let now_slot = current_slot()?;
    let staking_config = &mut ctx.accounts.staking_config;
    let index = staking_config.pool_count;
    staking_config.total_alloc_point = staking_config
        .total_alloc_point
        .checked_add(alloc_point)
        .ok_or(ErrorCode::MathOverflow)?;
    staking_config.pool_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

    let pool_state = ctx.accounts.pool_state.deref_mut();
    pool_state.bump = ctx.bumps.pool_state;
    pool_state.index = index;
    pool_state.config = ctx.accounts.staking_config.key();
    pool_state.stake_mint = ctx.accounts.stake_mint.key();
    pool_state.stake_vault = ctx.accounts.stake_vault.key();
    pool_state.alloc_point = alloc_point;
    pool_state.last_reward_slot = now_slot;
    pool_state.total_pool_rewards = total_reward_amount;
    pool_state.remaining_pool_rewards = total_reward_amount;

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_reward_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_reward_amount,
        ctx.accounts.reward_mint.decimals,
    )?;

    emit!(PoolInitialized {
        index,
        stake_mint: ctx.accounts.stake_mint.key(),
        alloc_point,
        total_reward_amount,
    });
    Ok(())
}
