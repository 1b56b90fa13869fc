//! Deterministic addresses of every account a vault touches.
//!
//! Clients use these to assemble instructions; the program uses the same
//! seeds in its account constraints, so both sides always agree.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;

use crate::constants::{ASSET_SEED, AUTHORITY_SEED, NATIVE_SEED, STATE_SEED};

/// `[STATE_SEED, owner, seed_le]`
pub fn vault_record_address(owner: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STATE_SEED, owner.as_ref(), seed.to_le_bytes().as_ref()],
        &crate::ID,
    )
}

/// `[AUTHORITY_SEED, vault_record]`
pub fn authority_address(vault_record: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AUTHORITY_SEED, vault_record.as_ref()], &crate::ID)
}

/// `[NATIVE_SEED, authority]`
pub fn native_holding_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NATIVE_SEED, authority.as_ref()], &crate::ID)
}

/// `[ASSET_SEED, vault_record, mint]`
pub fn asset_ledger_address(vault_record: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ASSET_SEED, vault_record.as_ref(), mint.as_ref()],
        &crate::ID,
    )
}

/// Associated token account of the authority for `mint`,
/// `[authority, token_program, mint]` under the ATA program.
pub fn asset_holding_address(authority: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[authority.as_ref(), token_program.as_ref(), mint.as_ref()],
        &AssociatedToken::id(),
    )
    .0
}
