//! Account addresses used throughout OpenSwap.
//!
//! An [`Address`] identifies a party (offerer, acceptor, withdrawal
//! beneficiary) or an asset contract. The zero address doubles as the
//! token address of the native currency and as "no acceptor yet" in
//! serialized form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 20-byte account or asset-contract address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zeroes address. Used as the token address of the native
    /// currency.
    pub const ZERO: Self = Self([0u8; 20]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Short hex form for logging (first 4 bytes).
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Address {
    /// A random non-zero address for test fixtures.
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill(&mut bytes);
        bytes[0] |= 1;
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_address_is_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::random().is_zero());
    }

    #[test]
    fn random_addresses_differ() {
        assert_ne!(Address::random(), Address::random());
    }

    #[test]
    fn display_is_hex() {
        let addr = Address::from_bytes([0xab; 20]);
        assert_eq!(format!("{addr}"), format!("0x{}", "ab".repeat(20)));
        assert_eq!(addr.short(), "abababab");
    }

    #[test]
    fn serde_roundtrip() {
        let addr = Address::random();
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
