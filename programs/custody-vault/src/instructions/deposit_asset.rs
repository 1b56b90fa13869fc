use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{ASSET_SEED, STATE_SEED};
use crate::custody::credit;
use crate::derive::asset_holding_address;
use crate::errors::VaultError;
use crate::events::AssetDeposited;
use crate::state::{AssetLedger, VaultRecord};
use crate::transfer::AssetTransfer;

/// Move `amount` tokens of `mint` from the owner into the vault.
///
/// The vault's token account (an ATA of the authority) and the asset ledger
/// entry are created on first use of a mint, paid for by the owner.
///
/// The entry grows by what reached the vault's token account, which is less
/// than `amount` for Token-2022 mints with a transfer fee.
pub fn deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<u64> {
    let ledger_bump = ctx.bumps.asset_ledger;
    let accounts = ctx.accounts;

    accounts.vault.authorize(&accounts.owner.key())?;

    let vault_key = accounts.vault.key();
    let mint_key = accounts.mint.key();
    let holding = asset_holding_address(
        &accounts.vault.authority,
        &mint_key,
        &accounts.token_program.key(),
    );
    require_keys_eq!(
        accounts.vault_token_account.key(),
        holding,
        VaultError::AccountDerivationMismatch
    );

    if accounts.asset_ledger.bind(vault_key, mint_key, holding, ledger_bump)? {
        accounts.vault.track_asset()?;
        msg!("[vault] new asset mint={} holding={}", mint_key, holding);
    }
    accounts
        .asset_ledger
        .ensure_backed(accounts.vault_token_account.amount)?;
    require!(
        accounts.owner_token_account.amount >= amount,
        VaultError::InsufficientFunds
    );

    let mover = AssetTransfer {
        mint: &accounts.mint,
        from: &accounts.owner_token_account,
        to: &accounts.vault_token_account,
        authority: accounts.owner.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        signer: None,
    };
    let previous = accounts.asset_ledger.balance;
    let asset_balance = credit(&mut accounts.asset_ledger.balance, amount, &mover)?;

    msg!(
        "[vault] deposit_asset mint={} amount={} credited={} asset_balance={}",
        mint_key,
        amount,
        asset_balance - previous,
        asset_balance
    );

    emit!(AssetDeposited {
        vault: vault_key,
        owner: accounts.owner.key(),
        mint: mint_key,
        amount,
        asset_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(asset_balance)
}

#[derive(Accounts)]
pub struct DepositAsset<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED, vault.owner.as_ref(), vault.seed.to_le_bytes().as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultRecord>,

    /// CHECK: seeds-only PDA, pinned to the address stored at initialize
    #[account(address = vault.authority @ VaultError::AccountDerivationMismatch)]
    pub authority: UncheckedAccount<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = owner_token_account.mint == mint.key() @ VaultError::AssetMintMismatch,
        constraint = owner_token_account.owner == owner.key() @ VaultError::Unauthorized,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Authority-owned holding account for this mint
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = AssetLedger::LEN,
        seeds = [ASSET_SEED, vault.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub asset_ledger: Box<Account<'info, AssetLedger>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
