use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_user_to_pool_vault};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init_if_needed,
        seeds = [
            USER_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = UserInfo::LEN
    )]
    pub user_info: Account<'info, UserInfo>,

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

    /// System program
    pub system_program: Program<'info, System>,
}

/// Stake `amount` of principal. Shares are minted 1:1; the caller's reward
/// snapshot is refreshed first so a deposit never earns for time that already
/// elapsed.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = current_timestamp()?;
    let vault_state = &mut ctx.accounts.vault_state;
    let user_info = &mut ctx.accounts.user_info;

    vault_state.update_rewards(now)?;
    vault_state.deposit_shares(user_info, amount)?;

    if user_info.owner == Pubkey::default() {
        user_info.owner = ctx.accounts.owner.key();
        user_info.bump = ctx.bumps.user_info;
    }

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
    )?;

    emit!(crate::states::Deposit {
        account: ctx.accounts.owner.key(),
        amount,
    });
    Ok(())
}
