use anchor_lang::prelude::*;
use anchor_spl::token_interface;

use crate::error::ErrorCode;

/// Current cluster slot.
pub fn current_slot() -> Result<u64> {
    Ok(Clock::get()
        .map_err(|_| error!(ErrorCode::ClockUnavailable))?
        .slot)
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
