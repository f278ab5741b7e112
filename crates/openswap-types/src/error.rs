//! Error types for the OpenSwap engine.
//!
//! All errors use the `OSW_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Validation errors (malformed input, rejected before any mutation)
//! - 2xx: Authorization errors (wrong caller)
//! - 3xx: State-conflict errors (offer already in a terminal state)
//! - 4xx: Transfer failures (asset adapter)
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{OfferId, TokenReference};

/// Central error enum for all OpenSwap operations.
#[derive(Debug, Error)]
pub enum SwapError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// An offer must lock at least one token.
    #[error("OSW_ERR_100: offer bundle is empty: need to offer at least 1 token")]
    EmptyOfferBundle,

    /// An offer must ask for at least one token.
    #[error("OSW_ERR_101: accept bundle is empty: need to accept at least 1 token")]
    EmptyAcceptBundle,

    /// The attached native value didn't equal the bundle's native sum.
    /// No partial credit and no refund of the difference.
    #[error("OSW_ERR_102: invalid amount of native token sent: expected {expected}, got {attached}")]
    NativeValueMismatch { expected: Decimal, attached: Decimal },

    /// A bundle exceeded the configured entry cap.
    #[error("OSW_ERR_103: bundle too large: {len} entries, max {max}")]
    BundleTooLarge { len: usize, max: usize },

    // =================================================================
    // Authorization Errors (2xx)
    // =================================================================
    /// Only the offerer may cancel an offer.
    #[error("OSW_ERR_200: only offerer can cancel {0}")]
    NotOfferer(OfferId),

    /// An offerer cannot accept its own offer.
    #[error("OSW_ERR_201: cannot self accept {0}")]
    SelfAccept(OfferId),

    // =================================================================
    // State-Conflict Errors (3xx)
    // =================================================================
    /// No offer with this id exists.
    #[error("OSW_ERR_300: offer not found: {0}")]
    OfferNotFound(OfferId),

    /// The offer was already accepted (terminal state).
    #[error("OSW_ERR_301: {0} already accepted")]
    AlreadyAccepted(OfferId),

    /// The offer was already canceled (terminal state).
    #[error("OSW_ERR_302: {0} already canceled")]
    AlreadyCanceled(OfferId),

    // =================================================================
    // Transfer Failures (4xx)
    // =================================================================
    /// The holder doesn't own enough of the asset to pull.
    #[error("OSW_ERR_400: insufficient assets for {token}: need {needed}, have {available}")]
    InsufficientAssets {
        token: TokenReference,
        needed: Decimal,
        available: Decimal,
    },

    /// The asset contract rejected the transfer.
    #[error("OSW_ERR_401: transfer rejected by {token}")]
    TransferRejected { token: TokenReference },

    /// A push would release more of an asset than escrow holds.
    /// Indicates a broken conservation invariant.
    #[error("OSW_ERR_402: escrow underflow for {token}: releasing {needed}, held {held}")]
    EscrowUnderflow {
        token: TokenReference,
        needed: Decimal,
        held: Decimal,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OSW_ERR_900: internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwapError>;
