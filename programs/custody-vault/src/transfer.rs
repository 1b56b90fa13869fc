use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token_interface::{self, Mint, TokenAccount, TransferChecked};

use crate::authority::HoldingSigner;
use crate::custody::ValueMover;
use crate::errors::VaultError;

/// SOL transfer through the System program.
///
/// Inbound transfers are signed by the owner's transaction signature
/// (`signer: None`). Outbound transfers leave the native holding PDA and are
/// signed with the seeds of a verified [`HoldingSigner`], never a private key.
pub struct NativeTransfer<'a, 'info> {
    pub from: AccountInfo<'info>,
    pub to: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub signer: Option<&'a HoldingSigner<'a>>,
}

impl ValueMover for NativeTransfer<'_, '_> {
    fn move_value(&self, amount: u64) -> Result<u64> {
        let cpi_accounts = Transfer {
            from: self.from.clone(),
            to: self.to.clone(),
        };
        let cpi_program = self.system_program.clone();

        match self.signer {
            Some(signer) => {
                let seeds = signer.seeds();
                let signer_seeds = &[&seeds[..]];
                system_program::transfer(
                    CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
                    amount,
                )?;
            }
            None => system_program::transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?,
        }
        Ok(amount)
    }
}

/// Token transfer through `transfer_checked`, for SPL Token and Token-2022.
///
/// The received amount is read back from the destination account, so a
/// Token-2022 transfer fee withheld on the way in is never credited.
pub struct AssetTransfer<'a, 'info> {
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub from: &'a InterfaceAccount<'info, TokenAccount>,
    pub to: &'a InterfaceAccount<'info, TokenAccount>,
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer: Option<&'a HoldingSigner<'a>>,
}

impl ValueMover for AssetTransfer<'_, '_> {
    fn move_value(&self, amount: u64) -> Result<u64> {
        check_asset_route(&self.from.mint, &self.to.mint, &self.mint.key())?;
        let before = self.to.amount;

        let cpi_accounts = TransferChecked {
            from: self.from.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.to.to_account_info(),
            authority: self.authority.clone(),
        };
        let cpi_program = self.token_program.clone();
        let decimals = self.mint.decimals;

        match self.signer {
            Some(signer) => {
                let seeds = signer.seeds();
                let signer_seeds = &[&seeds[..]];
                token_interface::transfer_checked(
                    CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds),
                    amount,
                    decimals,
                )?;
            }
            None => token_interface::transfer_checked(
                CpiContext::new(cpi_program, cpi_accounts),
                amount,
                decimals,
            )?,
        }

        let after = settled_amount(&self.to.to_account_info())?;
        received_amount(before, after)
    }
}

/// Token amount currently stored in `account`, read past any cached copy.
fn settled_amount(account: &AccountInfo) -> Result<u64> {
    let data = account.try_borrow_data()?;
    let state = TokenAccount::try_deserialize(&mut &data[..])?;
    Ok(state.amount)
}

/// Growth of a token account across a transfer into it.
pub fn received_amount(before: u64, after: u64) -> Result<u64> {
    let received = after.checked_sub(before).ok_or(VaultError::Underflow)?;
    Ok(received)
}

/// Both ends of a token transfer must hold the declared mint.
pub fn check_asset_route(from_mint: &Pubkey, to_mint: &Pubkey, mint: &Pubkey) -> Result<()> {
    require_keys_eq!(*from_mint, *mint, VaultError::AssetMintMismatch);
    require_keys_eq!(*to_mint, *mint, VaultError::AssetMintMismatch);
    Ok(())
}
