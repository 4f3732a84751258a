use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_pool_vault_to_user};
use crate::AUTH_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    /// CHECK: Authority PDA signing the payout
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

/// Withdraw `amount` of principal after the vault completed, together with
/// the caller's full settled reward. No penalty applies in this phase.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.update_rewards(now)?;
    let reward = vault_state.withdraw_shares(&mut ctx.accounts.user_info, amount)?;
    let payout = amount.checked_add(reward).ok_or(ErrorCode::MathOverflow)?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        payout,
        ctx.accounts.stake_mint.decimals,
        &[&[AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    emit!(crate::states::Withdraw {
        account: ctx.accounts.owner.key(),
        amount,
        reward,
    });
    Ok(())
}
