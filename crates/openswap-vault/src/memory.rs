//! In-memory asset vault.
//!
//! Tracks per-(holder, token) balances plus a single escrow bucket per
//! token. All mutations are atomic: either the full transfer succeeds or
//! the vault is unchanged. A blocked-token set simulates asset contracts
//! that reject transfers, for adversarial tests of the registry's
//! unwind and verify-then-clear paths.

use std::collections::{HashMap, HashSet};

use openswap_types::{Address, Result, SwapError, TokenReference, TokenValue};
use rust_decimal::Decimal;

use crate::adapter::TransferAdapter;

/// In-memory [`TransferAdapter`] implementation.
///
/// Native currency and contract tokens share one code path: a
/// [`TokenReference`] keys both the holder balances and the escrow
/// bucket. Non-fungible values are amounts of 1.
#[derive(Debug, Default)]
pub struct MemoryVault {
    /// Per-(holder, token) balances.
    holdings: HashMap<(Address, TokenReference), Decimal>,
    /// Escrow-held balance per token.
    escrowed: HashMap<TokenReference, Decimal>,
    /// Tokens whose contract currently rejects all transfers.
    blocked: HashSet<TokenReference>,
}

impl MemoryVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a holder with assets out of thin air. Test funding only.
    pub fn mint(&mut self, holder: Address, value: &TokenValue) {
        *self
            .holdings
            .entry((holder, value.token_reference))
            .or_default() += value.value;
    }

    /// A holder's balance of one token.
    #[must_use]
    pub fn balance(&self, holder: Address, token: &TokenReference) -> Decimal {
        self.holdings
            .get(&(holder, *token))
            .copied()
            .unwrap_or_default()
    }

    /// Escrow-held balance of one token.
    #[must_use]
    pub fn escrowed_balance(&self, token: &TokenReference) -> Decimal {
        self.escrowed.get(token).copied().unwrap_or_default()
    }

    /// Mark a token's contract as rejecting (or accepting) transfers.
    pub fn set_blocked(&mut self, token: TokenReference, blocked: bool) {
        if blocked {
            self.blocked.insert(token);
        } else {
            self.blocked.remove(&token);
        }
    }

    fn check_contract(&self, token: &TokenReference) -> Result<()> {
        if self.blocked.contains(token) {
            return Err(SwapError::TransferRejected { token: *token });
        }
        Ok(())
    }
}

impl TransferAdapter for MemoryVault {
    fn pull(&mut self, from: Address, value: &TokenValue) -> Result<()> {
        if value.value.is_zero() {
            return Ok(());
        }
        let token = value.token_reference;
        self.check_contract(&token)?;

        let held = self.holdings.entry((from, token)).or_default();
        if *held < value.value {
            return Err(SwapError::InsufficientAssets {
                token,
                needed: value.value,
                available: *held,
            });
        }

        *held -= value.value;
        *self.escrowed.entry(token).or_default() += value.value;
        tracing::debug!(token = %token, from = %from.short(), amount = %value.value, "pulled into escrow");
        Ok(())
    }

    fn push(&mut self, to: Address, value: &TokenValue) -> Result<()> {
        if value.value.is_zero() {
            return Ok(());
        }
        let token = value.token_reference;
        self.check_contract(&token)?;

        let held = self.escrowed.get_mut(&token).ok_or(SwapError::EscrowUnderflow {
            token,
            needed: value.value,
            held: Decimal::ZERO,
        })?;
        if *held < value.value {
            return Err(SwapError::EscrowUnderflow {
                token,
                needed: value.value,
                held: *held,
            });
        }

        *held -= value.value;
        *self.holdings.entry((to, token)).or_default() += value.value;
        tracing::debug!(token = %token, to = %to.short(), amount = %value.value, "released from escrow");
        Ok(())
    }
}
