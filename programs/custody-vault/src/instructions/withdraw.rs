use anchor_lang::prelude::*;

use crate::authority::HoldingSigner;
use crate::constants::STATE_SEED;
use crate::custody::debit;
use crate::errors::VaultError;
use crate::events::NativeWithdrawn;
use crate::state::VaultRecord;
use crate::transfer::NativeTransfer;

/// Return `amount` lamports from the native holding account to the owner.
///
/// SECURITY:
/// - the limit is `vault.native_balance`, never the raw holding lamports
/// - the holding PDA signs through a re-derived [`HoldingSigner`]
/// - the rent-exempt reserve stays behind, so the holding account survives
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
    let accounts = ctx.accounts;

    accounts.vault.authorize(&accounts.owner.key())?;

    let authority = accounts.vault.authority;
    let holding_key = accounts.native_holding.key();
    let signer = HoldingSigner::for_native_holding(&authority, accounts.vault.native_bump, &holding_key)?;

    accounts
        .vault
        .ensure_native_backed(accounts.native_holding.lamports())?;

    let mover = NativeTransfer {
        from: accounts.native_holding.to_account_info(),
        to: accounts.owner.to_account_info(),
        system_program: accounts.system_program.to_account_info(),
        signer: Some(&signer),
    };
    let native_balance = debit(&mut accounts.vault.native_balance, amount, &mover)?;

    msg!("[vault] withdraw amount={} native_balance={}", amount, native_balance);

    emit!(NativeWithdrawn {
        vault: accounts.vault.key(),
        owner: accounts.owner.key(),
        amount,
        native_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(native_balance)
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED, vault.owner.as_ref(), vault.seed.to_le_bytes().as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultRecord>,

    #[account(
        mut,
        address = vault.native_holding @ VaultError::AccountDerivationMismatch,
    )]
    pub native_holding: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
