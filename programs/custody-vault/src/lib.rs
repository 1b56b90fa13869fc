#![allow(unexpected_cfgs)]

//! # Custody Vault
//!
//! Holds native SOL and SPL tokens for a single owner behind a
//! program-derived authority:
//!  - one vault record per `(owner, seed)`, never re-initializable
//!  - balances tracked in the record, not read off the holding accounts
//!  - outgoing transfers signed only by re-derived PDA seeds
//!  - checked arithmetic, all checks before any CPI

use anchor_lang::prelude::*;

declare_id!("GukyrZBNpNPr5mRjXqymiPVadkZB9bBx4aqTypWUWGNq");

pub mod authority;
pub mod constants;
pub mod custody;
pub mod derive;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod transfer;

#[cfg(test)]
mod tests;

pub use instructions::{Deposit, DepositAsset, Initialize, Withdraw, WithdrawAsset};
pub use state::{AssetLedger, VaultRecord};

pub(crate) use instructions::{
    __client_accounts_deposit, __client_accounts_deposit_asset, __client_accounts_initialize,
    __client_accounts_withdraw, __client_accounts_withdraw_asset, __cpi_client_accounts_deposit,
    __cpi_client_accounts_deposit_asset, __cpi_client_accounts_initialize,
    __cpi_client_accounts_withdraw, __cpi_client_accounts_withdraw_asset,
};

#[program]
pub mod custody_vault {
    use super::*;

    /// Create the vault record for `(owner, seed)`.
    /// Fails with `AlreadyInitialized` if it exists.
    pub fn initialize(ctx: Context<Initialize>, seed: u64) -> Result<()> {
        instructions::initialize(ctx, seed)
    }

    /// Deposit SOL; returns the new native balance.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<u64> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw SOL back to the owner; returns the new native balance.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
        instructions::withdraw(ctx, amount)
    }

    /// Deposit tokens of one mint; returns the new balance for that mint.
    pub fn deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<u64> {
        instructions::deposit_asset(ctx, amount)
    }

    /// Withdraw tokens of one mint; returns the new balance for that mint.
    pub fn withdraw_asset(ctx: Context<WithdrawAsset>, amount: u64) -> Result<u64> {
        instructions::withdraw_asset(ctx, amount)
    }
}
