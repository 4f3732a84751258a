use anchor_lang::prelude::*;
use anchor_spl::token_interface;

use crate::error::ErrorCode;

/// Current cluster time as `u64` seconds.
pub fn current_timestamp() -> Result<u64> {
    let clock = Clock::get().map_err(|_| error!(ErrorCode::ClockUnavailable))?;
    u64::try_from(clock.unix_timestamp).map_err(|_| error!(ErrorCode::InvalidTimestamp))
}

pub fn transfer_from_user_to_pool_vault<'info>(
    signer: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            token_interface::TransferChecked {
                from,
                mint,
                to: to_vault,
                authority: signer,
            },
        ),
        amount,
        mint_decimals,
    )
}

pub fn transfer_from_pool_vault_to_user<'info>(
    authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            token_interface::TransferChecked {
                from: from_vault,
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
}
