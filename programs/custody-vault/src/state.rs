use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// Custodial record for one `(owner, seed)` pair.
///
/// SECURITY: The record is a PDA at `[STATE_SEED, owner, seed_le]`, so there
/// is exactly one per pair and nobody but the owner can make it sign for
/// anything. Value never sits in the record itself:
/// - native SOL lives in the system account at `native_holding`
/// - tokens live in associated token accounts owned by `authority`
///
/// `native_balance` is the owner's withdrawable SOL. The holding account also
/// carries `native_reserve` (its rent-exempt minimum) plus anything sent to it
/// from outside the program, neither of which is ever paid out.
#[account]
#[derive(Default)]
pub struct VaultRecord {
    /// The only signer allowed to deposit / withdraw
    pub owner: Pubkey,
    /// Caller-chosen discriminator, lets one owner hold several vaults
    pub seed: u64,
    /// Derived authority, `[AUTHORITY_SEED, vault_record]`
    pub authority: Pubkey,
    pub authority_bump: u8,
    /// Derived native holding account, `[NATIVE_SEED, authority]`
    pub native_holding: Pubkey,
    pub native_bump: u8,
    /// Lamports funded at initialize to keep the holding account rent-exempt
    pub native_reserve: u64,
    /// Lamports credited to the owner
    pub native_balance: u64,
    /// Number of mints this vault has accepted
    pub asset_count: u32,
    /// Canonical bump of the record itself
    pub bump: u8,
}

impl VaultRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // seed
        32 + // authority
        1 + // authority_bump
        32 + // native_holding
        1 + // native_bump
        8 + // native_reserve
        8 + // native_balance
        4 + // asset_count
        1; // bump

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// A freshly allocated record is all zeroes; anything else was already
    /// initialized and must never be overwritten.
    pub fn ensure_uninitialized(&self) -> Result<()> {
        require!(!self.is_initialized(), VaultError::AlreadyInitialized);
        Ok(())
    }

    pub fn authorize(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, VaultError::Unauthorized);
        Ok(())
    }

    /// Re-validates the ledger against the holding account right before a
    /// transfer: recorded balance plus reserve must be physically present.
    pub fn ensure_native_backed(&self, holding_lamports: u64) -> Result<()> {
        let required = self
            .native_balance
            .checked_add(self.native_reserve)
            .ok_or(VaultError::Overflow)?;
        require!(holding_lamports >= required, VaultError::InsufficientFunds);
        Ok(())
    }

    pub fn track_asset(&mut self) -> Result<()> {
        self.asset_count = self
            .asset_count
            .checked_add(1)
            .ok_or(VaultError::Overflow)?;
        Ok(())
    }
}

/// One `tokenBalances[mint]` entry, a PDA at `[ASSET_SEED, vault_record, mint]`.
#[account]
#[derive(Default)]
pub struct AssetLedger {
    /// Vault record this entry belongs to
    pub vault: Pubkey,
    pub mint: Pubkey,
    /// Authority-owned token account holding the tokens
    pub holding: Pubkey,
    /// Tokens credited to the vault owner
    pub balance: u64,
    pub bump: u8,
}

impl AssetLedger {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        32 + // mint
        32 + // holding
        8 + // balance
        1; // bump

    /// Binds a freshly created entry, or checks an existing one still
    /// describes the same vault, mint and holding account.
    ///
    /// Returns `true` when the entry was created by this call.
    pub fn bind(&mut self, vault: Pubkey, mint: Pubkey, holding: Pubkey, bump: u8) -> Result<bool> {
        if self.vault == Pubkey::default() {
            self.vault = vault;
            self.mint = mint;
            self.holding = holding;
            self.balance = 0;
            self.bump = bump;
            return Ok(true);
        }

        require_keys_eq!(self.vault, vault, VaultError::AccountDerivationMismatch);
        require_keys_eq!(self.mint, mint, VaultError::AssetMintMismatch);
        require_keys_eq!(self.holding, holding, VaultError::AccountDerivationMismatch);
        Ok(false)
    }

    pub fn ensure_backed(&self, holding_amount: u64) -> Result<()> {
        require!(holding_amount >= self.balance, VaultError::InsufficientFunds);
        Ok(())
    }
}
