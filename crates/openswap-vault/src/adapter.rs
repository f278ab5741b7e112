//! The transfer adapter seam between the registry and asset mechanics.

use openswap_types::{Address, Result, TokenValue};

/// Translates a [`TokenValue`] plus a direction into the correct transfer
/// mechanism for its token type.
///
/// `pull` moves assets from a holder into escrow; `push` releases escrowed
/// assets to a beneficiary. Implementations must never assume success:
/// both directions return `Result` and leave state unchanged on failure.
/// The adapter retains no registry state between calls.
pub trait TransferAdapter {
    /// Move `value` from `from` into escrow.
    ///
    /// # Errors
    /// - `InsufficientAssets` if the holder doesn't own enough
    /// - `TransferRejected` if the asset contract refuses the transfer
    fn pull(&mut self, from: Address, value: &TokenValue) -> Result<()>;

    /// Release `value` from escrow to `to`.
    ///
    /// # Errors
    /// - `EscrowUnderflow` if escrow holds less than `value`
    /// - `TransferRejected` if the asset contract refuses the transfer
    fn push(&mut self, to: Address, value: &TokenValue) -> Result<()>;
}
