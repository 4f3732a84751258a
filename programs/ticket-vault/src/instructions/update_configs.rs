use crate::error::ErrorCode;
use crate::states::*;
use crate::FEE_RATE_DENOMINATOR_VALUE;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
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

    pub system_program: Program<'info, System>,
}

/// Admin-gated parameter updates.
///
/// - `0` → rotate the vault admin (new pubkey via remaining accounts)
/// - `1` → rotate the fee receiver (new token account via remaining accounts)
/// - `2` → set the early-exit fee rate to `value` (basis points)
pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
    let vault_state = &mut ctx.accounts.vault_state;
    match param {
        0 => {
            let new_admin = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_admin, Pubkey::default());
            vault_state.admin = new_admin;
        }
        1 => {
            let new_fee_account = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_fee_account, Pubkey::default());
            vault_state.fee_token_account = new_fee_account;
        }
        2 => {
            require_gte!(FEE_RATE_DENOMINATOR_VALUE, value, ErrorCode::InvalidFeeRate);
            vault_state.withdraw_fee_rate = value;
        }
        _ => return Err(error!(ErrorCode::InvalidParam)),
    }

    emit!(ConfigUpdated {
        admin: vault_state.admin,
        fee_token_account: vault_state.fee_token_account,
        withdraw_fee_rate: vault_state.withdraw_fee_rate,
    });
    Ok(())
}
