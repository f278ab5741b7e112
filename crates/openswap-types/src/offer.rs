//! The offer model: a locked bundle against a wanted bundle.
//!
//! An [`Offer`] is created once, mutated at most once (either accepted or
//! canceled — the two terminal transitions are mutually exclusive), and
//! never deleted: it stays queryable forever as an audit record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, TokenValue};

/// Sequential offer identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OfferId(pub u64);

impl OfferId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offer:{}", self.0)
    }
}

/// A proposed swap: the offerer's escrowed bundle against the bundle it
/// wants back.
///
/// Both bundles are non-empty at creation and immutable afterwards.
/// `acceptor` is set exactly once, only by a caller other than the
/// offerer. `canceled`, once true, is permanent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    /// What the offerer locked in escrow.
    pub offer_tokens: Vec<TokenValue>,
    /// What the offerer wants in return.
    pub accept_tokens: Vec<TokenValue>,
    pub offerer: Address,
    pub acceptor: Option<Address>,
    pub canceled: bool,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// Whether this offer can still be accepted or canceled.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.acceptor.is_none() && !self.canceled
    }

    /// Whether this offer reached the accepted terminal state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.acceptor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenReference;
    use rust_decimal::Decimal;

    fn open_offer() -> Offer {
        Offer {
            id: OfferId(1),
            offer_tokens: vec![TokenValue::native(Decimal::new(2, 0))],
            accept_tokens: vec![TokenValue::native(Decimal::ONE)],
            offerer: Address::random(),
            acceptor: None,
            canceled: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn offer_id_next() {
        assert_eq!(OfferId(1).next(), OfferId(2));
        assert_eq!(format!("{}", OfferId(7)), "offer:7");
    }

    #[test]
    fn fresh_offer_is_open() {
        let offer = open_offer();
        assert!(offer.is_open());
        assert!(!offer.is_accepted());
        assert!(!offer.canceled);
    }

    #[test]
    fn accepted_offer_is_terminal() {
        let mut offer = open_offer();
        offer.acceptor = Some(Address::random());
        assert!(!offer.is_open());
        assert!(offer.is_accepted());
    }

    #[test]
    fn canceled_offer_is_terminal() {
        let mut offer = open_offer();
        offer.canceled = true;
        assert!(!offer.is_open());
        assert!(!offer.is_accepted());
    }

    #[test]
    fn serde_roundtrip() {
        let mut offer = open_offer();
        offer
            .offer_tokens
            .push(TokenValue::new(
                TokenReference::erc20(Address::random()),
                Decimal::new(500, 0),
            ));
        let json = serde_json::to_string(&offer).unwrap();
        let back: Offer = serde_json::from_str(&json).unwrap();
        assert_eq!(offer, back);
    }
}
