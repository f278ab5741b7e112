//! # openswap-vault
//!
//! **Transfer Adapter**: performs inbound deposits (pull) and outbound
//! releases (push) for each supported asset type, isolating transfer
//! mechanics from the escrow state machine.
//!
//! The [`TransferAdapter`] trait is the seam the registry calls through;
//! [`MemoryVault`] is the in-memory implementation used in tests and
//! single-process deployments. Every transfer reports failure distinctly
//! from success so the registry can abort its enclosing operation
//! atomically.

pub mod adapter;
pub mod memory;

pub use adapter::TransferAdapter;
pub use memory::MemoryVault;
