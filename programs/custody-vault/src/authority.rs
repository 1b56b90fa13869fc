use anchor_lang::prelude::*;

use crate::constants::{AUTHORITY_SEED, NATIVE_SEED};
use crate::errors::VaultError;

/// Proof that this invocation may sign for a program-derived address.
///
/// SECURITY: The only way to get one is [`HoldingSigner::verify`], which
/// re-derives the address from its seed tag, anchor key and stored bump and
/// compares it with the account actually passed in. A forged holding account
/// or a non-canonical bump never yields signer seeds.
pub struct HoldingSigner<'a> {
    tag: &'static [u8],
    anchor: &'a Pubkey,
    bump: [u8; 1],
}

impl<'a> HoldingSigner<'a> {
    pub fn verify(
        tag: &'static [u8],
        anchor: &'a Pubkey,
        bump: u8,
        expected: &Pubkey,
    ) -> Result<Self> {
        let derived = Pubkey::create_program_address(&[tag, anchor.as_ref(), &[bump]], &crate::ID)
            .map_err(|_| error!(VaultError::AccountDerivationMismatch))?;
        require_keys_eq!(derived, *expected, VaultError::AccountDerivationMismatch);

        Ok(Self {
            tag,
            anchor,
            bump: [bump],
        })
    }

    /// Signer for the vault authority, which owns every token holding account.
    pub fn for_authority(vault_record: &'a Pubkey, bump: u8, expected: &Pubkey) -> Result<Self> {
        Self::verify(AUTHORITY_SEED, vault_record, bump, expected)
    }

    /// Signer for the native holding account, which is the `from` of outgoing SOL.
    pub fn for_native_holding(authority: &'a Pubkey, bump: u8, expected: &Pubkey) -> Result<Self> {
        Self::verify(NATIVE_SEED, authority, bump, expected)
    }

    pub fn seeds(&self) -> [&[u8]; 3] {
        [self.tag, self.anchor.as_ref(), &self.bump]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{authority_address, native_holding_address, vault_record_address};
    use crate::tests::helper::assert_vault_error;

    #[test]
    fn verified_signer_reproduces_the_address() {
        let (record, _) = vault_record_address(&Pubkey::new_unique(), 0);
        let (authority, bump) = authority_address(&record);

        let signer = HoldingSigner::for_authority(&record, bump, &authority).unwrap();
        let seeds = signer.seeds();
        assert_eq!(Pubkey::create_program_address(&seeds, &crate::ID).unwrap(), authority);
    }

    #[test]
    fn native_holding_signer_is_rooted_in_the_authority() {
        let (record, _) = vault_record_address(&Pubkey::new_unique(), 0);
        let (authority, _) = authority_address(&record);
        let (holding, bump) = native_holding_address(&authority);

        assert!(HoldingSigner::for_native_holding(&authority, bump, &holding).is_ok());

        let other_authority = Pubkey::new_unique();
        assert_vault_error(
            HoldingSigner::for_native_holding(&other_authority, bump, &holding),
            VaultError::AccountDerivationMismatch,
        );
    }

    #[test]
    fn forged_holding_account_is_rejected() {
        let (record, _) = vault_record_address(&Pubkey::new_unique(), 0);
        let (_, bump) = authority_address(&record);

        assert_vault_error(
            HoldingSigner::for_authority(&record, bump, &Pubkey::new_unique()),
            VaultError::AccountDerivationMismatch,
        );
    }

    #[test]
    fn wrong_bump_is_rejected() {
        let (record, _) = vault_record_address(&Pubkey::new_unique(), 0);
        let (authority, bump) = authority_address(&record);

        for other in (0..=u8::MAX).filter(|b| *b != bump).take(8) {
            assert_vault_error(
                HoldingSigner::for_authority(&record, other, &authority),
                VaultError::AccountDerivationMismatch,
            );
        }
    }
}
