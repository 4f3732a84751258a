use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_pool_vault_to_user};
use crate::AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts for the early-exit paths (`exit_while_collecting` and
/// `exit_while_staking`). Both burn the caller's whole position, deduct the
/// penalty from principal, and route it to the configured fee account.
#[derive(Accounts)]
pub struct ExitPosition<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [
            USER_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump = user_info.bump,
    )]
    pub user_info: Account<'info, UserInfo>,

    /// CHECK: Authority PDA signing the payouts
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        address = vault_state.stake_mint @ ErrorCode::InvalidStakeMint,
        mint::token_program = token_program,
    )]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mut, address = vault_state.token_vault @ ErrorCode::InvalidVault)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = vault_state.fee_token_account @ ErrorCode::InvalidFeeAccount)]
    pub fee_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Leave the vault before staking started. No rewards exist yet; the penalty
/// is deducted from principal.
pub fn exit_while_collecting(ctx: Context<ExitPosition>) -> Result<()> {
    require!(
        ctx.accounts.vault_state.status == VaultStatus::Collecting,
        ErrorCode::NotCollecting
    );
    settle_exit(ctx)
}

/// Leave the vault mid-staking. Accrued rewards are settled and paid out in
/// full; the penalty applies to principal only.
pub fn exit_while_staking(ctx: Context<ExitPosition>) -> Result<()> {
    require!(
        ctx.accounts.vault_state.status == VaultStatus::Staking,
        ErrorCode::NotStaking
    );
    settle_exit(ctx)
}

fn settle_exit(ctx: Context<ExitPosition>) -> Result<()> {
    let now = current_timestamp()?;
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.update_rewards(now)?;
    let (payout, fee, reward) = vault_state.exit_shares(&mut ctx.accounts.user_info)?;
    let user_total = payout.checked_add(reward).ok_or(ErrorCode::MathOverflow)?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        user_total,
        ctx.accounts.stake_mint.decimals,
        &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.fee_token_account.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        fee,
        ctx.accounts.stake_mint.decimals,
        &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    emit!(ExitWithFees {
        account: ctx.accounts.owner.key(),
        amount: payout,
        fee,
        reward,
    });
    Ok(())
}
