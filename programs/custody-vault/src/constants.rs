/// Seed tag of the vault record PDA: `[STATE_SEED, owner, seed_le]`.
pub const STATE_SEED: &[u8] = b"state";

/// Seed tag of the derived authority: `[AUTHORITY_SEED, vault_record]`.
///
/// The authority is never created as an account. It only signs, through
/// its seeds, for the token holding accounts it owns.
pub const AUTHORITY_SEED: &[u8] = b"auth";

/// Seed tag of the native holding account: `[NATIVE_SEED, authority]`.
pub const NATIVE_SEED: &[u8] = b"vault";

/// Seed tag of a per-mint asset ledger: `[ASSET_SEED, vault_record, mint]`.
pub const ASSET_SEED: &[u8] = b"asset";
