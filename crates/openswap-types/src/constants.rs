//! System-wide constants for the OpenSwap engine.

/// Default maximum number of entries per offer/accept bundle.
pub const DEFAULT_MAX_BUNDLE_LEN: usize = 64;

/// Offer ids are sequential and start here.
pub const FIRST_OFFER_ID: u64 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenSwap";
