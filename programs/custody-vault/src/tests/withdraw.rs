use solana_native_token::LAMPORTS_PER_SOL;
use solana_signer::Signer;

use super::helper::*;
use crate::errors::VaultError;

#[test]
fn test_deposit_withdraw_scenario() {
    let (mut svm, owner) = setup();
    let vault = do_initialize(&mut svm, &owner);
    let tenth = LAMPORTS_PER_SOL / 10;

    send_ix(&mut svm, vault.deposit_ix(&vault.owner, 2 * tenth), &owner);
    assert_eq!(read_vault(&svm, &vault).native_balance, 2 * tenth);

    let owner_before = lamports(&svm, &vault.owner);
    let meta = send_ix(&mut svm, vault.withdraw_ix(&vault.owner, tenth), &owner);
    assert_eq!(returned_u64(&meta), tenth);
    assert_eq!(read_vault(&svm, &vault).native_balance, tenth);
    // owner also paid the transaction fee
    assert!(lamports(&svm, &vault.owner) > owner_before);

    let result = try_send_ix(&mut svm, vault.withdraw_ix(&vault.owner, 2 * tenth), &owner);
    assert_program_error(result, VaultError::InsufficientFunds);
    assert_eq!(read_vault(&svm, &vault).native_balance, tenth);
    assert_eq!(lamports(&svm, &vault.native_holding), RENT_EXEMPT_MINIMUM + tenth);
}

#[test]
fn test_withdraw_full_balance_keeps_reserve() {
    let (mut svm, owner) = setup();
    let vault = do_initialize(&mut svm, &owner);

    send_ix(&mut svm, vault.deposit_ix(&vault.owner, LAMPORTS_PER_SOL), &owner);
    let meta = send_ix(&mut svm, vault.withdraw_ix(&vault.owner, LAMPORTS_PER_SOL), &owner);

    assert_eq!(returned_u64(&meta), 0);
    assert_eq!(lamports(&svm, &vault.native_holding), RENT_EXEMPT_MINIMUM);
}

#[test]
fn test_withdraw_by_stranger_is_unauthorized() {
    let (mut svm, owner) = setup();
    let vault = do_initialize(&mut svm, &owner);
    send_ix(&mut svm, vault.deposit_ix(&vault.owner, LAMPORTS_PER_SOL), &owner);

    let stranger = stranger(&mut svm);
    let stranger_pk = addr_to_pubkey(&stranger.pubkey());
    let result = try_send_ix(&mut svm, vault.withdraw_ix(&stranger_pk, LAMPORTS_PER_SOL), &stranger);

    assert_program_error(result, VaultError::Unauthorized);
    assert_eq!(read_vault(&svm, &vault).native_balance, LAMPORTS_PER_SOL);
    assert_eq!(
        lamports(&svm, &vault.native_holding),
        RENT_EXEMPT_MINIMUM + LAMPORTS_PER_SOL
    );
}

#[test]
fn test_withdraw_ignores_unrecorded_lamports() {
    let (mut svm, owner) = setup();
    let vault = do_initialize(&mut svm, &owner);

    svm.airdrop(&pubkey_to_addr(&vault.native_holding), LAMPORTS_PER_SOL)
        .expect("Failed to airdrop to holding account");
    let result = try_send_ix(&mut svm, vault.withdraw_ix(&vault.owner, 1), &owner);

    assert_program_error(result, VaultError::InsufficientFunds);
}
