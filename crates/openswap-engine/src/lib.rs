//! # openswap-engine
//!
//! The OpenSwap core: the offer state machine and its pull-payment
//! settlement engine.
//!
//! ## Architecture
//!
//! 1. **OfferRegistry**: owns the offer list, enforces the
//!    creation/cancel/accept rules, and enqueues payouts on each
//!    successful transition
//! 2. **PendingLedger**: per-address queue of amounts owed but not yet
//!    paid out — the only place outbound transfers happen
//!
//! ## Offer flow
//!
//! ```text
//! create_offer (escrow offerer bundle)
//!     ├─ cancel_offer → offer_tokens owed to offerer
//!     └─ accept (escrow acceptor bundle)
//!           → accept_tokens owed to offerer, offer_tokens owed to acceptor
//! withdraw → ledger drained through the transfer adapter
//! ```
//!
//! Outbound transfers happen only inside `withdraw`, never inside
//! `accept` or `cancel_offer`: a misbehaving recipient cannot block the
//! other party's transition (pull-payment pattern).

pub mod ledger;
pub mod registry;

pub use ledger::PendingLedger;
pub use registry::OfferRegistry;
