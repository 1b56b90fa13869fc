use anchor_lang::prelude::*;

use crate::constants::{AUTHORITY_SEED, NATIVE_SEED, STATE_SEED};
use crate::custody::{ensure_spendable, ValueMover};
use crate::events::VaultInitialized;
use crate::state::VaultRecord;
use crate::transfer::NativeTransfer;

/// Create the vault record for `(owner, seed)` and fund its native holding
/// account up to the rent-exempt minimum.
///
/// SECURITY: `init_if_needed` lets an existing record reach the handler so
/// the second call fails with `AlreadyInitialized` instead of a generic
/// "account in use". The record is checked before anything is written, so
/// an attacker can never overwrite an existing owner.
pub fn initialize(ctx: Context<Initialize>, seed: u64) -> Result<()> {
    ctx.accounts.vault.ensure_uninitialized()?;

    let rent = Rent::get()?;
    let native_reserve = rent.minimum_balance(0);
    let shortfall = native_reserve.saturating_sub(ctx.accounts.native_holding.lamports());

    if shortfall > 0 {
        let owner_info = ctx.accounts.owner.to_account_info();
        ensure_spendable(
            owner_info.lamports(),
            rent.minimum_balance(owner_info.data_len()),
            shortfall,
        )?;

        NativeTransfer {
            from: owner_info,
            to: ctx.accounts.native_holding.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            signer: None,
        }
        .move_value(shortfall)?;
    }

    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;
    vault.owner = ctx.accounts.owner.key();
    vault.seed = seed;
    vault.authority = ctx.accounts.authority.key();
    vault.authority_bump = ctx.bumps.authority;
    vault.native_holding = ctx.accounts.native_holding.key();
    vault.native_bump = ctx.bumps.native_holding;
    vault.native_reserve = native_reserve;
    vault.native_balance = 0;
    vault.asset_count = 0;
    vault.bump = ctx.bumps.vault;

    msg!("[vault] initialize owner={} seed={}", vault.owner, seed);
    msg!("[vault] authority={} native_holding={}", vault.authority, vault.native_holding);

    emit!(VaultInitialized {
        vault: vault_key,
        owner: vault.owner,
        seed,
        authority: vault.authority,
        native_holding: vault.native_holding,
        native_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = VaultRecord::LEN,
        seeds = [STATE_SEED, owner.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub vault: Account<'info, VaultRecord>,

    /// CHECK: never allocated; only its seeds are used to sign for the
    /// token holding accounts it owns
    #[account(
        seeds = [AUTHORITY_SEED, vault.key().as_ref()],
        bump
    )]
    pub authority: UncheckedAccount<'info>,

    /// Native SOL holding account, a system-owned PDA of the authority
    #[account(
        mut,
        seeds = [NATIVE_SEED, authority.key().as_ref()],
        bump
    )]
    pub native_holding: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
