use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault already initialized for this owner and seed")]
    AlreadyInitialized,
    #[msg("Signer does not match the vault owner")]
    Unauthorized,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Balance overflow")]
    Overflow,
    #[msg("Balance underflow")]
    Underflow,
    #[msg("Token account mint does not match the declared mint")]
    AssetMintMismatch,
    #[msg("Account does not match its seed derivation")]
    AccountDerivationMismatch,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
}
