use crate::states::*;
use crate::utils::current_timestamp;
use anchor_lang::prelude::*;

/// Permissionless crank advancing the reward accumulator. Every
/// share-affecting instruction also runs the same update lazily, so calling
/// this is never required for correctness, only for fresher read-side data.
#[derive(Accounts)]
pub struct UpdateVault<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

pub fn update_vault(ctx: Context<UpdateVault>) -> Result<()> {
    let now = current_timestamp()?;
    ctx.accounts.vault_state.update_rewards(now)
}
