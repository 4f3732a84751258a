use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::transfer_from_user_to_pool_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

#[derive(Accounts)]
pub struct AddRewards<'info> {
    #[account(
        mut,
        constraint = owner.key() == vault_state.admin @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

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

/// Commit `amount` reward tokens to the pool. Only possible while the vault
/// is still collecting, so the emission rate fixed by `start_staking` always
/// covers the whole committed pool.
pub fn add_rewards(ctx: Context<AddRewards>, amount: u64) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.add_rewards(amount)?;

    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.stake_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.stake_mint.decimals,
    )?;

    emit!(RewardsAdded {
        amount,
        total_vault_rewards: ctx.accounts.vault_state.total_vault_rewards,
    });
    Ok(())
}
