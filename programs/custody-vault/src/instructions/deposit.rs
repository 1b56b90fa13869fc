use anchor_lang::prelude::*;

use crate::constants::STATE_SEED;
use crate::custody::{credit, ensure_spendable};
use crate::errors::VaultError;
use crate::events::NativeDeposited;
use crate::state::VaultRecord;
use crate::transfer::NativeTransfer;

/// Move `amount` lamports from the owner into the native holding account.
///
/// The owner must keep its own rent-exempt minimum after paying.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
    let accounts = ctx.accounts;

    accounts.vault.authorize(&accounts.owner.key())?;
    accounts
        .vault
        .ensure_native_backed(accounts.native_holding.lamports())?;

    let owner_info = accounts.owner.to_account_info();
    let owner_reserve = Rent::get()?.minimum_balance(owner_info.data_len());
    ensure_spendable(owner_info.lamports(), owner_reserve, amount)?;

    let mover = NativeTransfer {
        from: owner_info,
        to: accounts.native_holding.to_account_info(),
        system_program: accounts.system_program.to_account_info(),
        signer: None,
    };
    let native_balance = credit(&mut accounts.vault.native_balance, amount, &mover)?;

    msg!("[vault] deposit amount={} native_balance={}", amount, native_balance);

    emit!(NativeDeposited {
        vault: accounts.vault.key(),
        owner: accounts.owner.key(),
        amount,
        native_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(native_balance)
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// SECURITY: seeds come from the stored owner, so a foreign signer
    /// reaches `has_one` and fails with `Unauthorized`
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
