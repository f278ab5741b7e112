//! # openswap-types
//!
//! Shared types, errors, and configuration for the **OpenSwap** escrow
//! swap engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`OfferId`]
//! - **Token model**: [`TokenType`], [`TokenReference`], [`TokenValue`]
//! - **Offer model**: [`Offer`]
//! - **Events**: [`SwapEvent`], [`EventRecord`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`SwapError`] with `OSW_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod address;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod offer;
pub mod token;

// Re-export all primary types at crate root for ergonomic imports:
//   use openswap_types::{Offer, TokenValue, SwapError, ...};

pub use address::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use offer::*;
pub use token::*;

// Constants are accessed via `openswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
