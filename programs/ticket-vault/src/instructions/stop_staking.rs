use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::current_timestamp;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct StopStaking<'info> {
    #[account(
        constraint = owner.key() == vault_state.admin @ ErrorCode::InvalidOwner
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,
}

/// `Staking → Completed`: settles accrual up to `min(now, stop)` and freezes
/// the accumulator there. Principal plus settled rewards become withdrawable
/// without penalty.
pub fn stop_staking(ctx: Context<StopStaking>) -> Result<()> {
    let now = current_timestamp()?;
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.stop_staking(now)?;

    emit!(StakingStopped {
        stop_timestamp: vault_state.stop_timestamp,
        remaining_vault_rewards: vault_state.remaining_vault_rewards,
    });
    msg!("Staking stopped");
    Ok(())
}
