use anchor_lang::prelude::*;
use spl_math::uint::U256;

use crate::error::ErrorCode;
use crate::states::UserStake;
use crate::PRECISION;

pub const POOL_SEED: &str = "pool";

/// One staking pool. Emission is shared between pools proportionally to
/// their allocation points and capped by the pool's committed budget.
#[account]
#[derive(Default, Debug)]
pub struct PoolState {
    pub bump: u8,
    pub index: u64,
    pub config: Pubkey,
    pub stake_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub alloc_point: u64,
    pub last_reward_slot: u64,
    /// Accumulated reward per staked token, scaled by `PRECISION`.
    pub acc_token_per_share: u128,
    pub total_staked: u64,
    pub total_pool_rewards: u64,
    pub remaining_pool_rewards: u64,
}

impl PoolState {
    pub const LEN: usize = 8 + 1 + 8 + 32 * 3 + 8 * 5 + 16;

    /// Lazy accrual: credit `slots_elapsed * reward_per_slot * alloc_point /
    /// total_alloc_point` to the per-share index, bounded by the pool's
    /// remaining budget. Idempotent at a fixed slot.
    pub fn update_rewards(
        &mut self,
        now_slot: u64,
        reward_per_slot: u64,
        total_alloc_point: u64,
    ) -> Result<()> {
        if now_slot <= self.last_reward_slot {
            return Ok(());
        }
        if self.total_staked == 0 || total_alloc_point == 0 {
            self.last_reward_slot = now_slot;
            return Ok(());
        }
        let elapsed = now_slot - self.last_reward_slot;

        let accrued = (elapsed as u128)
            .checked_mul(reward_per_slot as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_mul(self.alloc_point as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(total_alloc_point as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        let accrued = std::cmp::min(accrued, self.remaining_pool_rewards as u128) as u64;

        self.acc_token_per_share = self
            .acc_token_per_share
            .checked_add(
                (accrued as u128)
                    .checked_mul(PRECISION)
                    .ok_or(ErrorCode::MathOverflow)?
                    .checked_div(self.total_staked as u128)
                    .ok_or(ErrorCode::MathOverflow)?,
            )
            .ok_or(ErrorCode::MathOverflow)?;
        self.remaining_pool_rewards -= accrued;
        self.last_reward_slot = now_slot;
        Ok(())
    }

    pub fn pending_reward(&self, user: &UserStake) -> Result<u64> {
        let delta = self
            .acc_token_per_share
            .checked_sub(user.reward_per_share_completed)
            .ok_or(ErrorCode::UnderflowError)?;
        let newly_accrued = U256::from(user.amount)
            .checked_mul(U256::from(delta))
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(U256::from(PRECISION))
            .ok_or(ErrorCode::MathOverflow)?;
        if newly_accrued > U256::from(u64::MAX) {
            return err!(ErrorCode::MathOverflow);
        }
        user.rewards_pending
            .checked_add(newly_accrued.as_u64())
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    fn settle_rewards(&self, user: &mut UserStake) -> Result<()> {
        user.rewards_pending = self.pending_reward(user)?;
        user.reward_per_share_completed = self.acc_token_per_share;
        Ok(())
    }

    /// Settle, then take everything pending for payout. Returns the amount;
    /// zero is fine here, stake movements pay out whatever happens to be
    /// pending.
    pub fn harvest(&mut self, user: &mut UserStake) -> Result<u64> {
        self.settle_rewards(user)?;
        let reward = user.rewards_pending;
        user.rewards_pending = 0;
        user.total_rewards_claimed = user
            .total_rewards_claimed
            .checked_add(reward)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(reward)
    }

    pub fn add_stake(&mut self, user: &mut UserStake, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        user.amount = user.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn withdraw_stake(&mut self, user: &mut UserStake, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::ZeroAmount);
        require_gte!(user.amount, amount, ErrorCode::InsufficientStake);
        user.amount -= amount;
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::UnderflowError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(alloc_point: u64, budget: u64) -> PoolState {
        PoolState {
            alloc_point,
            total_pool_rewards: budget,
            remaining_pool_rewards: budget,
            ..PoolState::default()
        }
    }

    #[test]
    fn accrual_is_idempotent_at_a_fixed_slot() {
        let mut p = pool(1_000, 1_500_000);
        let mut user = UserStake::default();
        p.add_stake(&mut user, 5_000).unwrap();

        p.update_rewards(100, 10, 1_000).unwrap();
        let acc = p.acc_token_per_share;
        p.update_rewards(100, 10, 1_000).unwrap();
        assert_eq!(p.acc_token_per_share, acc);
    }

    #[test]
    fn emission_is_proportional_to_alloc_points() {
        let mut heavy = pool(3_000, 1_500_000);
        let mut light = pool(1_000, 1_500_000);
        let mut a = UserStake::default();
        let mut b = UserStake::default();
        heavy.add_stake(&mut a, 5_000).unwrap();
        light.add_stake(&mut b, 5_000).unwrap();

        // 4_000 total alloc points shared between the two pools
        heavy.update_rewards(400, 10, 4_000).unwrap();
        light.update_rewards(400, 10, 4_000).unwrap();

        let heavy_reward = heavy.pending_reward(&a).unwrap();
        let light_reward = light.pending_reward(&b).unwrap();
        assert_eq!(heavy_reward, 3 * light_reward);
        // 400 slots * 10 per slot fully split across the two pools
        assert_eq!(heavy_reward + light_reward, 4_000);
    }

    #[test]
    fn emission_stops_at_the_pool_budget() {
        let mut p = pool(1_000, 500);
        let mut user = UserStake::default();
        p.add_stake(&mut user, 1_000).unwrap();

        p.update_rewards(1_000_000, 10, 1_000).unwrap();
        assert_eq!(p.remaining_pool_rewards, 0);
        assert_eq!(p.pending_reward(&user).unwrap(), 500);

        p.update_rewards(2_000_000, 10, 1_000).unwrap();
        assert_eq!(p.pending_reward(&user).unwrap(), 500);
    }

    #[test]
    fn harvest_resets_pending_to_zero() {
        let mut p = pool(1_000, 1_500_000);
        let mut user = UserStake::default();
        p.add_stake(&mut user, 5_000).unwrap();
        p.update_rewards(100, 10, 1_000).unwrap();

        let reward = p.harvest(&mut user).unwrap();
        assert_eq!(reward, 1_000);
        assert_eq!(p.pending_reward(&user).unwrap(), 0);
        assert_eq!(user.total_rewards_claimed, 1_000);
    }

    #[test]
    fn withdraw_is_bounded_by_the_staked_balance() {
        let mut p = pool(1_000, 1_500_000);
        let mut user = UserStake::default();
        p.add_stake(&mut user, 5_000).unwrap();

        p.withdraw_stake(&mut user, 4_000).unwrap();
        assert_eq!(user.amount, 1_000);
        assert_eq!(p.total_staked, 1_000);
        assert_eq!(
            p.withdraw_stake(&mut user, 2_000).unwrap_err(),
            ErrorCode::InsufficientStake.into()
        );
    }

    proptest! {
        #[test]
        fn stake_movements_conserve_totals(
            deposits in proptest::collection::vec(1u64..=1_000_000_000u64, 1..10)
        ) {
            let mut p = pool(1_000, 1_500_000);
            let mut users: Vec<UserStake> =
                deposits.iter().map(|_| UserStake::default()).collect();
            for (user, amount) in users.iter_mut().zip(deposits.iter()) {
                p.add_stake(user, *amount).unwrap();
            }
            let sum: u64 = users.iter().map(|u| u.amount).sum();
            prop_assert_eq!(p.total_staked, sum);

            for user in users.iter_mut() {
                let amount = user.amount;
                p.withdraw_stake(user, amount).unwrap();
            }
            prop_assert_eq!(p.total_staked, 0);
        }

        #[test]
        fn settled_rewards_never_exceed_emission(
            stake_a in 1u64..=1_000_000_000u64,
            stake_b in 1u64..=1_000_000_000u64,
            slots in 1u64..=100_000u64,
        ) {
            let budget = 1_500_000_000u64;
            let mut p = pool(1_000, budget);
            let mut a = UserStake::default();
            let mut b = UserStake::default();
            p.add_stake(&mut a, stake_a).unwrap();
            p.add_stake(&mut b, stake_b).unwrap();
            p.update_rewards(slots, 10, 1_000).unwrap();

            let emitted = budget - p.remaining_pool_rewards;
            let ra = p.harvest(&mut a).unwrap();
            let rb = p.harvest(&mut b).unwrap();
            prop_assert!(ra + rb <= emitted);
        }
    }
}
