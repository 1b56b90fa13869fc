use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::authority::HoldingSigner;
use crate::constants::{ASSET_SEED, STATE_SEED};
use crate::custody::debit;
use crate::errors::VaultError;
use crate::events::AssetWithdrawn;
use crate::state::{AssetLedger, VaultRecord};
use crate::transfer::AssetTransfer;

/// Return `amount` tokens of `mint` from the vault to the owner's ATA.
///
/// Mirror of `deposit_asset`: no fee is taken and the holding account stays
/// open even when the ledger entry reaches zero.
///
/// SECURITY: the transfer is signed by the derived authority, re-derived from
/// the vault record key and stored bump. The owner's destination ATA is
/// created on demand.
pub fn withdraw_asset(ctx: Context<WithdrawAsset>, amount: u64) -> Result<u64> {
    let accounts = ctx.accounts;

    accounts.vault.authorize(&accounts.owner.key())?;

    let vault_key = accounts.vault.key();
    let mint_key = accounts.mint.key();
    let authority_key = accounts.authority.key();
    let signer = HoldingSigner::for_authority(&vault_key, accounts.vault.authority_bump, &authority_key)?;

    require_keys_eq!(
        accounts.asset_ledger.holding,
        accounts.vault_token_account.key(),
        VaultError::AccountDerivationMismatch
    );
    accounts
        .asset_ledger
        .ensure_backed(accounts.vault_token_account.amount)?;

    let mover = AssetTransfer {
        mint: &accounts.mint,
        from: &accounts.vault_token_account,
        to: &accounts.owner_token_account,
        authority: accounts.authority.to_account_info(),
        token_program: accounts.token_program.to_account_info(),
        signer: Some(&signer),
    };
    let asset_balance = debit(&mut accounts.asset_ledger.balance, amount, &mover)?;

    msg!(
        "[vault] withdraw_asset mint={} amount={} asset_balance={}",
        mint_key,
        amount,
        asset_balance
    );

    emit!(AssetWithdrawn {
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
pub struct WithdrawAsset<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
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
        associated_token::mint = mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [ASSET_SEED, vault.key().as_ref(), mint.key().as_ref()],
        bump = asset_ledger.bump,
        has_one = vault @ VaultError::AccountDerivationMismatch,
        has_one = mint @ VaultError::AssetMintMismatch,
    )]
    pub asset_ledger: Box<Account<'info, AssetLedger>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
