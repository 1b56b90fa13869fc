use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// Moves `amount` of one asset class between two fixed accounts.
///
/// Implemented by the transfer adapters in [`crate::transfer`]; the ledger
/// functions below never know whether SOL or tokens are moving.
pub trait ValueMover {
    /// Returns how much reached the destination. Equal to `amount` unless
    /// the asset withholds a fee on transfer.
    fn move_value(&self, amount: u64) -> Result<u64>;
}

/// Credits what actually arrived after moving `amount` in.
///
/// SECURITY: overflow is checked against the full `amount` before the
/// transfer, and the balance is only written once the transfer returned
/// `Ok`. A failure leaves `balance` untouched.
pub fn credit<M: ValueMover>(balance: &mut u64, amount: u64, mover: &M) -> Result<u64> {
    require!(amount > 0, VaultError::ZeroAmount);
    balance.checked_add(amount).ok_or(VaultError::Overflow)?;

    let received = mover.move_value(amount)?;
    let next = balance.checked_add(received).ok_or(VaultError::Overflow)?;

    *balance = next;
    Ok(next)
}

/// Debits `amount` from `balance` after moving it out.
///
/// The recorded balance is the limit, not the holding account: value that
/// reached the holding account some other way is never withdrawable.
pub fn debit<M: ValueMover>(balance: &mut u64, amount: u64, mover: &M) -> Result<u64> {
    require!(amount > 0, VaultError::ZeroAmount);
    require!(amount <= *balance, VaultError::InsufficientFunds);

    // cannot fail once `amount <= *balance` holds
    let next = balance.checked_sub(amount).ok_or(VaultError::Underflow)?;
    // the holding side always gives up the full amount; fees land on the receiver
    mover.move_value(amount)?;

    *balance = next;
    Ok(next)
}

/// A source must be able to pay `amount` and still keep its own
/// rent-exempt `reserve`.
pub fn ensure_spendable(lamports: u64, reserve: u64, amount: u64) -> Result<()> {
    let available = lamports.saturating_sub(reserve);
    require!(available >= amount, VaultError::InsufficientFunds);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AssetLedger;
    use crate::tests::helper::{assert_vault_error, FeeMover, MemoryMover};

    #[test]
    fn credit_moves_then_commits() {
        let mover = MemoryMover::funded(1_000);
        let mut balance = 10;

        assert_eq!(credit(&mut balance, 90, &mover).unwrap(), 100);
        assert_eq!(balance, 100);
        assert_eq!(mover.moved(), 90);
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let mover = MemoryMover::funded(1_000);
        let mut balance = 10;

        assert_vault_error(credit(&mut balance, 0, &mover), VaultError::ZeroAmount);
        assert_vault_error(debit(&mut balance, 0, &mover), VaultError::ZeroAmount);
        assert_eq!(balance, 10);
        assert_eq!(mover.calls(), 0);
    }

    #[test]
    fn credit_overflow_is_caught_before_transfer() {
        let mover = MemoryMover::funded(u64::MAX);
        let mut balance = u64::MAX - 5;

        assert_vault_error(credit(&mut balance, 6, &mover), VaultError::Overflow);
        assert_eq!(balance, u64::MAX - 5);
        assert_eq!(mover.calls(), 0);
    }

    #[test]
    fn debit_beyond_balance_is_insufficient_funds() {
        let mover = MemoryMover::funded(1_000);
        let mut balance = 100;

        for amount in [101, 1_000, u64::MAX] {
            assert_vault_error(debit(&mut balance, amount, &mover), VaultError::InsufficientFunds);
        }
        assert_eq!(balance, 100);
        assert_eq!(mover.calls(), 0);
    }

    #[test]
    fn debit_to_zero_is_allowed() {
        let mover = MemoryMover::funded(100);
        let mut balance = 100;

        assert_eq!(debit(&mut balance, 100, &mover).unwrap(), 0);
        assert_eq!(balance, 0);
    }

    #[test]
    fn failed_transfer_leaves_balance_untouched() {
        let mover = MemoryMover::funded(5);
        let mut balance = 100;

        assert!(debit(&mut balance, 50, &mover).is_err());
        assert!(credit(&mut balance, 50, &mover).is_err());
        assert_eq!(balance, 100);
    }

    #[test]
    fn fee_bearing_credit_records_what_arrived() {
        let mover = FeeMover::new(5_000, 10);
        let mut ledger = AssetLedger::default();

        assert_eq!(credit(&mut ledger.balance, 1_000, &mover).unwrap(), 990);
        assert_eq!(mover.received(), 990);
        assert!(ledger.ensure_backed(mover.received()).is_ok());

        // the entry stays usable for the next deposit
        assert_eq!(credit(&mut ledger.balance, 1_000, &mover).unwrap(), 1_980);
        assert_eq!(ledger.balance, mover.received());
    }

    #[test]
    fn fee_bearing_debit_takes_the_full_amount() {
        let mover = FeeMover::new(990, 10);
        let mut balance = 990;

        assert_eq!(debit(&mut balance, 990, &mover).unwrap(), 0);
        assert_eq!(mover.left(), 0);
        assert_eq!(mover.received(), 980);
    }

    #[test]
    fn debit_never_reaches_underflow() {
        let mover = MemoryMover::funded(u64::MAX);
        let mut balance = 7;

        assert_vault_error(debit(&mut balance, 8, &mover), VaultError::InsufficientFunds);
        assert_eq!(debit(&mut balance, 7, &mover).unwrap(), 0);
        assert_vault_error(debit(&mut balance, 1, &mover), VaultError::InsufficientFunds);
    }

    #[test]
    fn spendable_keeps_the_source_reserve() {
        assert!(ensure_spendable(1_000_000, 890_880, 109_120).is_ok());
        assert_vault_error(
            ensure_spendable(1_000_000, 890_880, 109_121),
            VaultError::InsufficientFunds,
        );
        assert_vault_error(ensure_spendable(500, 890_880, 1), VaultError::InsufficientFunds);
    }
}
