use crate::states::*;
use crate::utils::current_slot;
use anchor_lang::prelude::*;

/// Permissionless crank advancing a pool's reward accumulator. Stake and
/// claim instructions run the same update lazily.
#[derive(Accounts)]
pub struct UpdatePool<'info> {
    pub payer: Signer<'info>,

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
}

pub fn update_pool(ctx: Context<UpdatePool>) -> Result<()> {
    let now_slot = current_slot()?;
    let staking_config = &ctx.accounts.staking_config;
    ctx.accounts.pool_state.update_rewards(
        now_slot,
        staking_config.reward_per_slot,
        staking_config.total_alloc_point,
    )
}
