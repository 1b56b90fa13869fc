use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub seed: u64,
    pub authority: Pubkey,
    pub native_holding: Pubkey,
    pub native_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct NativeDeposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub native_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct NativeWithdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub native_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct AssetDeposited {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub asset_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct AssetWithdrawn {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub asset_balance: u64,
    pub timestamp: i64,
}
