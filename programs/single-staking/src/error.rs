use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not the staking admin")]
    InvalidOwner,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Allocation points must be greater than zero")]
    ZeroAllocPoint,

    #[msg("Withdraw amount exceeds the staked balance")]
    InsufficientStake,

    #[msg("No rewards available to claim")]
    NoRewardsToClaim,

    #[msg("Invalid stake mint account")]
    InvalidStakeMint,

    #[msg("Invalid reward mint account")]
    InvalidRewardMint,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Math operation overflowed")]
    MathOverflow,

    #[msg("Underflow occurred")]
    UnderflowError,

    #[msg("Clock sysvar is unavailable")]
    ClockUnavailable,
}
