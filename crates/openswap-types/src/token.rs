//! Token model: which asset, and how much of it.
//!
//! A [`TokenReference`] names an asset class (type tag + contract address
//! + sub-identifier); a [`TokenValue`] pairs a reference with an amount.
//! Identity of a reference is structural: two references with equal fields
//! are the same asset.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Address;

/// The kind of asset a [`TokenReference`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TokenType {
    /// The chain's native currency. Token address is [`Address::ZERO`].
    Native,
    /// Fungible token contract.
    Erc20,
    /// Non-fungible token contract; `token_id` selects the item.
    Erc721,
    /// Multi-token contract; `token_id` selects the class.
    Erc1155,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "NATIVE"),
            Self::Erc20 => write!(f, "ERC20"),
            Self::Erc721 => write!(f, "ERC721"),
            Self::Erc1155 => write!(f, "ERC1155"),
        }
    }
}

/// A structural description of an asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenReference {
    /// What transfer mechanism this asset uses.
    pub token_type: TokenType,
    /// The asset contract, or [`Address::ZERO`] for Native.
    pub token_address: Address,
    /// Asset-specific sub-identifier (NFT id, ERC-1155 class); 0 when
    /// irrelevant.
    pub token_id: u128,
}

impl TokenReference {
    /// The native currency reference.
    #[must_use]
    pub fn native() -> Self {
        Self {
            token_type: TokenType::Native,
            token_address: Address::ZERO,
            token_id: 0,
        }
    }

    #[must_use]
    pub fn erc20(token_address: Address) -> Self {
        Self {
            token_type: TokenType::Erc20,
            token_address,
            token_id: 0,
        }
    }

    #[must_use]
    pub fn erc721(token_address: Address, token_id: u128) -> Self {
        Self {
            token_type: TokenType::Erc721,
            token_address,
            token_id,
        }
    }

    #[must_use]
    pub fn erc1155(token_address: Address, token_id: u128) -> Self {
        Self {
            token_type: TokenType::Erc1155,
            token_address,
            token_id,
        }
    }

    /// Whether this reference is the native currency.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.token_type == TokenType::Native
    }
}

impl fmt::Display for TokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            write!(f, "NATIVE")
        } else {
            write!(
                f,
                "{}:{}#{}",
                self.token_type,
                self.token_address.short(),
                self.token_id
            )
        }
    }
}

/// An amount of a specific asset. For non-fungible types the value acts
/// as a presence flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenValue {
    pub token_reference: TokenReference,
    pub value: Decimal,
}

impl TokenValue {
    #[must_use]
    pub fn new(token_reference: TokenReference, value: Decimal) -> Self {
        Self {
            token_reference,
            value,
        }
    }

    /// A native-currency amount.
    #[must_use]
    pub fn native(value: Decimal) -> Self {
        Self::new(TokenReference::native(), value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.token_reference)
    }
}

/// Sum of the native-typed values in a bundle.
///
/// This is the amount a payable operation must carry as its attached
/// native value — non-native entries are pulled by the adapter instead.
#[must_use]
pub fn native_total(bundle: &[TokenValue]) -> Decimal {
    bundle
        .iter()
        .filter(|tv| tv.token_reference.is_native())
        .map(|tv| tv.value)
        .sum()
}
