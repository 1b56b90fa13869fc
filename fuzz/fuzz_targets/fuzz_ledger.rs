#![no_main]

use std::cell::Cell;

use anchor_lang::prelude::*;
use custody_vault::custody::{credit, debit, ValueMover};
use libfuzzer_sys::fuzz_target;

/// Moves value between two in-memory balances; fails like the runtime
/// would when the source runs dry.
struct Pair<'a> {
    from: &'a Cell<u64>,
    to: &'a Cell<u64>,
}

impl ValueMover for Pair<'_> {
    fn move_value(&self, amount: u64) -> Result<u64> {
        let left = self
            .from
            .get()
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        let arrived = self
            .to
            .get()
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        self.from.set(left);
        self.to.set(arrived);
        Ok(amount)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let owner = Cell::new(u64::from_le_bytes(data[0..8].try_into().unwrap_or([0; 8])));
    let holding = Cell::new(0u64);
    let mut balance = 0u64;

    // 9-byte ops: tag byte (even = deposit, odd = withdraw) + le amount.
    for op in data[8..].chunks_exact(9) {
        let amount = u64::from_le_bytes(op[1..9].try_into().unwrap_or([0; 8]));
        let before = (balance, owner.get(), holding.get());

        let result = if op[0] % 2 == 0 {
            credit(&mut balance, amount, &Pair { from: &owner, to: &holding })
        } else {
            debit(&mut balance, amount, &Pair { from: &holding, to: &owner })
        };

        match result {
            Ok(next) => assert_eq!(next, balance),
            // failed ops leave every balance untouched
            Err(_) => assert_eq!(before, (balance, owner.get(), holding.get())),
        }

        // recorded balance is always physically backed
        assert_eq!(balance, holding.get());
    }
});
