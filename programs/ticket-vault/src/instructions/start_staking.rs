use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::current_timestamp;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct StartStaking<'info> {
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

/// `Collecting → Staking`: fixes the start/stop timestamps and the emission
/// rate (`remaining_rewards / staking_period`).
pub fn start_staking(ctx: Context<StartStaking>) -> Result<()> {
    let now = current_timestamp()?;
    let vault_state = &mut ctx.accounts.vault_state;
    vault_state.start_staking(now)?;

    emit!(StakingStarted {
        start_timestamp: vault_state.start_timestamp,
        stop_timestamp: vault_state.stop_timestamp,
        reward_rate: vault_state.reward_rate,
    });
    msg!("Staking started");
    Ok(())
}
