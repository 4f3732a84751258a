use crate::error::ErrorCode;
use crate::states::*;
use crate::{AUTH_SEED, FEE_RATE_DENOMINATOR_VALUE, TOKEN_VAULT_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use std::ops::DerefMut;

/// Initializes the vault ledger and **creates** the program-owned token vault
/// at a PDA derived from `TOKEN_VAULT_SEED`.
///
/// The vault starts in the `Collecting` phase: deposits are accepted, nothing
/// accrues until the admin calls `start_staking`. The staking period and the
/// early-exit fee rate are fixed here; the fee receiver and the admin can be
/// rotated later via `update_config`.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// Deployer signer (must match program-level admin id)
    #[account(
        mut,
        constraint = owner.key() == crate::admin::id() @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA that owns the token vault.
    ///
    /// CHECK: PDA derivation is enforced by seeds; we rely on it only as a
    /// token authority (no data read).
    #[account(
        seeds = [AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Vault ledger account
    #[account(
        init,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        space = VaultState::LEN
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Mint of the staked token; rewards are denominated in the same mint
    #[account(mint::token_program = token_program)]
    pub stake_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Program-owned token vault holding principal and committed rewards
    #[account(
        init,
        seeds = [TOKEN_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = stake_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receiver of early-exit penalty fees
    #[account(
        token::mint = stake_mint,
        token::token_program = token_program,
    )]
    pub fee_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (interface)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program
    pub system_program: Program<'info, System>,
}

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    vault_admin: Pubkey,
    staking_period: u64,
    withdraw_fee_rate: u64,
) -> Result<()> {
    require_gt!(staking_period, 0, ErrorCode::InvalidStakingPeriod);
    require_gte!(
        FEE_RATE_DENOMINATOR_VALUE,
        withdraw_fee_rate,
        ErrorCode::InvalidFeeRate
    );
    require_keys_neq!(vault_admin, Pubkey::default());

    let vault_state = ctx.accounts.vault_state.deref_mut();
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.admin = vault_admin;
    vault_state.stake_mint = ctx.accounts.stake_mint.key();
    vault_state.token_vault = ctx.accounts.token_vault.key();
    vault_state.fee_token_account = ctx.accounts.fee_token_account.key();
    vault_state.status = VaultStatus::Collecting;
    vault_state.withdraw_fee_rate = withdraw_fee_rate;
    vault_state.staking_period = staking_period;

    emit!(VaultInitialized {
        admin: vault_admin,
        stake_mint: ctx.accounts.stake_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        fee_token_account: ctx.accounts.fee_token_account.key(),
        staking_period,
        withdraw_fee_rate,
    });
    msg!("Vault initialized");
    Ok(())
}
