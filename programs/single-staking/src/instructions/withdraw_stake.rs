use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{current_slot, transfer_from_pool_vault_to_user};
use crate::AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Authority PDA signing the payouts
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [STAKING_CONFIG_SEED.as_bytes()],
        bump = staking_config.bump,
    )]
    pub staking_config: Account<'info, StakingConfig>,

    #[account(
        mut,
        seeds = [
            POOL_SEED.as_bytes(),
            &pool_state.index.to_le_bytes()
        ],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [
            USER_STAKE_SEED.as_bytes(),
            pool_state.key().as_ref(),
            owner.key().as_ref()
        ],
        bump = user_stake.bump,
    )]
    pub user_stake: Account<'info, UserStake>,

    #[account(
        address = pool_state.stake_mint @ ErrorCode::InvalidStakeMint,
        mint::token_program = token_program,
    )]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = staking_config.reward_mint @ ErrorCode::InvalidRewardMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, address = pool_state.stake_vault @ ErrorCode::InvalidVault)]
    pub stake_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = staking_config.reward_vault @ ErrorCode::InvalidVault)]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_stake_token: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Unstake `amount` from the pool. Pending rewards are settled and paid out
/// before the principal moves.
pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
    let now_slot = current_slot()?;
    let staking_config = &ctx.accounts.staking_config;
    let pool_state = &mut ctx.accounts.pool_state;
    let user_stake = &mut ctx.accounts.user_stake;

    pool_state.update_rewards(
        now_slot,
        staking_config.reward_per_slot,
        staking_config.total_alloc_point,
    )?;
    let reward = pool_state.harvest(user_stake)?;
    pool_state.withdraw_stake(user_stake, amount)?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.stake_vault.to_account_info(),
        ctx.accounts.owner_stake_token.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
        &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    if reward > 0 {
        transfer_from_pool_vault_to_user(
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.reward_vault.to_account_info(),
            ctx.accounts.owner_reward_token.to_account_info(),
            ctx.accounts.reward_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            reward,
            ctx.accounts.reward_mint.decimals,
            &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
        )?;
        emit!(RewardsClaimed {
            account: ctx.accounts.owner.key(),
            pool_index: ctx.accounts.pool_state.index,
            reward,
        });
    }

    emit!(crate::states::Withdraw {
        account: ctx.accounts.owner.key(),
        pool_index: ctx.accounts.pool_state.index,
        amount,
    });
    Ok(())
}
