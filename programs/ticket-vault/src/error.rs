use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not the vault admin")]
    InvalidOwner,

    #[msg("Deposits are only accepted while collecting or staking")]
    DepositsClosed,

    #[msg("Vault is not in the collecting phase")]
    NotCollecting,

    #[msg("Vault is not in the staking phase")]
    NotStaking,

    #[msg("Vault has not completed staking")]
    NotCompleted,

    #[msg("Staking has already been started")]
    AlreadyStarted,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Insufficient vault shares for the operation")]
    InsufficientVaultShares,

    #[msg("No rewards available to claim")]
    NoRewardsToClaim,

    #[msg("Cannot start staking with an empty reward pool")]
    EmptyRewardPool,

    #[msg("Cannot start staking with zero total shares")]
    NoShares,

    #[msg("Fee rate exceeds the fee denominator")]
    InvalidFeeRate,

    #[msg("Staking period must be greater than zero")]
    InvalidStakingPeriod,

    #[msg("Invalid stake mint account")]
    InvalidStakeMint,

    #[msg("Invalid vault token account")]
    InvalidVault,

    #[msg("Invalid fee token account")]
    InvalidFeeAccount,

    #[msg("Invalid parameter provided")]
    InvalidParam,

    #[msg("Missing remaining account")]
    MissingRemainingAccount,

    #[msg("Math operation overflowed")]
    MathOverflow,

    #[msg("Underflow occurred")]
    UnderflowError,

    #[msg("Clock sysvar is unavailable")]
    ClockUnavailable,

    #[msg("Invalid timestamp conversion")]
    InvalidTimestamp,
}
