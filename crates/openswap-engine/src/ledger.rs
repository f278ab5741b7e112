//! Pending withdrawal ledger.
//!
//! A per-address FIFO queue of [`TokenValue`] amounts owed but not yet
//! paid out. Entries are appended by the registry on a successful cancel
//! or accept, and removed only by the withdrawal operation, one entry at
//! a time, after its outbound transfer succeeds. No entry is ever owed to
//! two addresses.

use std::collections::{HashMap, VecDeque};

use openswap_types::{Address, TokenReference, TokenValue};
use rust_decimal::Decimal;

/// Mapping beneficiary address → ordered queue of amounts owed.
#[derive(Debug, Default)]
pub struct PendingLedger {
    queues: HashMap<Address, VecDeque<TokenValue>>,
}

impl PendingLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append owed amounts to a beneficiary's queue, in order.
    pub fn enqueue(&mut self, beneficiary: Address, values: &[TokenValue]) {
        self.queues
            .entry(beneficiary)
            .or_default()
            .extend(values.iter().cloned());
    }

    /// The next entry owed to a beneficiary, if any.
    #[must_use]
    pub fn front(&self, beneficiary: Address) -> Option<&TokenValue> {
        self.queues.get(&beneficiary).and_then(VecDeque::front)
    }

    /// Remove and return the next entry owed to a beneficiary.
    ///
    /// Called by the withdrawal operation only after the entry's outbound
    /// transfer has succeeded (verify-then-clear).
    pub fn pop_front(&mut self, beneficiary: Address) -> Option<TokenValue> {
        self.queues.get_mut(&beneficiary).and_then(VecDeque::pop_front)
    }

    /// Owed entry at `index` in a beneficiary's queue.
    #[must_use]
    pub fn get(&self, beneficiary: Address, index: usize) -> Option<&TokenValue> {
        self.queues.get(&beneficiary).and_then(|q| q.get(index))
    }

    /// Number of entries owed to a beneficiary.
    #[must_use]
    pub fn count(&self, beneficiary: Address) -> usize {
        self.queues.get(&beneficiary).map_or(0, VecDeque::len)
    }

    /// Whether nothing is owed to a beneficiary.
    #[must_use]
    pub fn is_empty(&self, beneficiary: Address) -> bool {
        self.count(beneficiary) == 0
    }

    /// Total value owed across all beneficiaries for one token.
    ///
    /// Reconciliation invariant: for every token this equals what the
    /// registry has taken into escrow minus what has already been paid.
    #[must_use]
    pub fn total_owed(&self, token: &TokenReference) -> Decimal {
        self.queues
            .values()
            .flatten()
            .filter(|tv| tv.token_reference == *token)
            .map(|tv| tv.value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openswap_types::TokenValue;

    fn native(amount: i64) -> TokenValue {
        TokenValue::native(Decimal::new(amount, 0))
    }

    #[test]
    fn enqueue_appends_in_order() {
        let mut ledger = PendingLedger::new();
        let alice = Address::random();
        ledger.enqueue(alice, &[native(1), native(2)]);
        ledger.enqueue(alice, &[native(3)]);

        assert_eq!(ledger.count(alice), 3);
        assert_eq!(ledger.get(alice, 0), Some(&native(1)));
        assert_eq!(ledger.get(alice, 2), Some(&native(3)));
        assert_eq!(ledger.get(alice, 3), None);
    }

    #[test]
    fn pop_front_is_fifo() {
        let mut ledger = PendingLedger::new();
        let alice = Address::random();
        ledger.enqueue(alice, &[native(1), native(2)]);

        assert_eq!(ledger.front(alice), Some(&native(1)));
        assert_eq!(ledger.pop_front(alice), Some(native(1)));
        assert_eq!(ledger.pop_front(alice), Some(native(2)));
        assert_eq!(ledger.pop_front(alice), None);
        assert!(ledger.is_empty(alice));
    }

    #[test]
    fn queues_are_per_address() {
        let mut ledger = PendingLedger::new();
        let alice = Address::random();
        let bob = Address::random();
        ledger.enqueue(alice, &[native(5)]);

        assert_eq!(ledger.count(alice), 1);
        assert_eq!(ledger.count(bob), 0);
        assert!(ledger.front(bob).is_none());
    }

    #[test]
    fn total_owed_sums_across_beneficiaries() {
        let mut ledger = PendingLedger::new();
        let token = TokenReference::erc20(Address::random());
        let alice = Address::random();
        let bob = Address::random();
        ledger.enqueue(alice, &[TokenValue::new(token, Decimal::new(30, 0)), native(1)]);
        ledger.enqueue(bob, &[TokenValue::new(token, Decimal::new(70, 0))]);

        assert_eq!(ledger.total_owed(&token), Decimal::new(100, 0));
        assert_eq!(ledger.total_owed(&TokenReference::native()), Decimal::ONE);
    }

    #[test]
    fn empty_ledger_owes_nothing() {
        let ledger = PendingLedger::new();
        assert_eq!(ledger.total_owed(&TokenReference::native()), Decimal::ZERO);
        assert!(ledger.is_empty(Address::random()));
    }
}
