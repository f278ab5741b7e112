//! Offer registry — the escrow state machine.
//!
//! Owns the offer list and the pending withdrawal ledger, enforces the
//! creation/cancel/accept rules, and enqueues payouts on each successful
//! transition. The registry is the sole writer of offer state; the
//! transfer adapter is passed `&mut` into each operation and retains
//! nothing between calls.
//!
//! State machine per offer:
//!
//! ```text
//! Created --cancel--> Canceled   (terminal)
//! Created --accept--> Accepted   (terminal)
//! ```
//!
//! Validation happens before any mutation; escrow pulls that fail
//! mid-bundle unwind the pulls already made in the same call. Outbound
//! transfers happen only inside `withdraw`.

use chrono::Utc;
use openswap_types::{
    constants, native_total, Address, EngineConfig, EventRecord, Offer, OfferId, Result,
    SwapError, SwapEvent, TokenValue,
};
use openswap_vault::TransferAdapter;
use rust_decimal::Decimal;

use crate::ledger::PendingLedger;

/// The offer list, the withdrawal ledger, and the rules binding them.
///
/// Constructed once at system initialization and handed to every
/// operation — no ambient globals.
pub struct OfferRegistry {
    /// All offers ever created, in id order. Never truncated.
    offers: Vec<Offer>,
    /// Amounts owed but not yet paid out.
    ledger: PendingLedger,
    /// Append-only audit trail of successful transitions.
    events: Vec<EventRecord>,
    config: EngineConfig,
}

impl OfferRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            offers: Vec::new(),
            ledger: PendingLedger::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Create an offer: validate the bundles, escrow the offerer's
    /// deposit, and store the offer in the `Created` state.
    ///
    /// The attached native value must exactly equal the sum of the
    /// Native-typed entries in `offer_tokens` — no partial credit, no
    /// refund of the difference. Non-native entries are pulled from the
    /// offerer; any pull failure unwinds the pulls already made in this
    /// call and aborts with the original error.
    ///
    /// There is no self-dealing restriction at creation time.
    ///
    /// # Errors
    /// `EmptyOfferBundle`, `EmptyAcceptBundle`, `BundleTooLarge`,
    /// `NativeValueMismatch`, or a transfer failure from the adapter.
    pub fn create_offer<V: TransferAdapter>(
        &mut self,
        vault: &mut V,
        offerer: Address,
        offer_tokens: Vec<TokenValue>,
        accept_tokens: Vec<TokenValue>,
        attached_native: Decimal,
    ) -> Result<OfferId> {
        if offer_tokens.is_empty() {
            return Err(SwapError::EmptyOfferBundle);
        }
        if accept_tokens.is_empty() {
            return Err(SwapError::EmptyAcceptBundle);
        }
        self.check_bundle_len(&offer_tokens)?;
        self.check_bundle_len(&accept_tokens)?;
        check_native(&offer_tokens, attached_native)?;

        escrow_bundle(vault, offerer, &offer_tokens, attached_native)?;

        let id = self
            .offers
            .last()
            .map_or(OfferId(constants::FIRST_OFFER_ID), |prev| prev.id.next());
        let offer = Offer {
            id,
            offer_tokens,
            accept_tokens,
            offerer,
            acceptor: None,
            canceled: false,
            created_at: Utc::now(),
        };
        self.offers.push(offer.clone());

        tracing::info!(
            offer_id = %id,
            offerer = %offerer.short(),
            offer_entries = offer.offer_tokens.len(),
            accept_entries = offer.accept_tokens.len(),
            "offer created"
        );
        self.record(SwapEvent::OfferCreated { id, offerer, offer });
        Ok(id)
    }

    /// Cancel an open offer and queue its bundle back to the offerer.
    ///
    /// Idempotency is enforced by the preconditions, not by silent
    /// success: a second call fails with `AlreadyCanceled`.
    ///
    /// # Errors
    /// `OfferNotFound`, `NotOfferer`, `AlreadyAccepted`, `AlreadyCanceled`.
    pub fn cancel_offer(&mut self, id: OfferId, caller: Address) -> Result<()> {
        let idx = self.offer_index(id)?;
        let offer = &self.offers[idx];
        if caller != offer.offerer {
            return Err(SwapError::NotOfferer(id));
        }
        check_open(offer)?;

        let offer = &mut self.offers[idx];
        offer.canceled = true;
        let offerer = offer.offerer;
        let refund = offer.offer_tokens.clone();
        self.ledger.enqueue(offerer, &refund);

        tracing::info!(offer_id = %id, offerer = %offerer.short(), "offer canceled");
        self.record(SwapEvent::OfferCanceled { id, offerer });
        Ok(())
    }

    /// Accept an open offer: escrow the acceptor's counter-deposit and
    /// queue each party's payout (the swap: each side now owes the
    /// other's deposit).
    ///
    /// The attached native value must exactly equal the sum of the
    /// Native-typed entries in the offer's `accept_tokens`. Escrow pulls
    /// have the same atomic unwind semantics as creation.
    ///
    /// # Errors
    /// `OfferNotFound`, `SelfAccept`, `AlreadyAccepted`,
    /// `AlreadyCanceled`, `NativeValueMismatch`, or a transfer failure.
    pub fn accept<V: TransferAdapter>(
        &mut self,
        vault: &mut V,
        id: OfferId,
        acceptor: Address,
        attached_native: Decimal,
    ) -> Result<()> {
        let idx = self.offer_index(id)?;
        let offer = &self.offers[idx];
        if acceptor == offer.offerer {
            return Err(SwapError::SelfAccept(id));
        }
        check_open(offer)?;
        check_native(&offer.accept_tokens, attached_native)?;

        let offerer = offer.offerer;
        let offer_tokens = offer.offer_tokens.clone();
        let accept_tokens = offer.accept_tokens.clone();

        escrow_bundle(vault, acceptor, &accept_tokens, attached_native)?;

        self.offers[idx].acceptor = Some(acceptor);
        self.ledger.enqueue(offerer, &accept_tokens);
        self.ledger.enqueue(acceptor, &offer_tokens);

        tracing::info!(
            offer_id = %id,
            offerer = %offerer.short(),
            acceptor = %acceptor.short(),
            "offer accepted"
        );
        self.record(SwapEvent::OfferAccepted { id, acceptor });
        Ok(())
    }

    /// Withdraw everything owed to the caller, paid to the caller.
    ///
    /// An empty queue is a valid no-op. See [`Self::withdraw_to`].
    pub fn withdraw<V: TransferAdapter>(
        &mut self,
        vault: &mut V,
        caller: Address,
    ) -> Result<Vec<TokenValue>> {
        self.withdraw_to(vault, caller, caller)
    }

    /// Trigger payout of everything owed to `beneficiary`.
    ///
    /// The caller is only the trigger: assets always go to the address
    /// they are owed to, so triggering a withdrawal for someone else
    /// cannot misdirect funds.
    ///
    /// Drains the beneficiary's queue front-to-back, verify-then-clear
    /// per entry: each entry is removed only after its outbound transfer
    /// succeeds, and the batch aborts on the first failure leaving the
    /// failing entry and everything behind it still queued for a later
    /// retry. A drained queue cannot be drained again — re-invocation is
    /// a safe no-op, never a duplicate payment.
    ///
    /// Returns the entries actually paid.
    ///
    /// # Errors
    /// A transfer failure from the adapter; already-paid entries stay
    /// paid, unpaid entries stay owed.
    pub fn withdraw_to<V: TransferAdapter>(
        &mut self,
        vault: &mut V,
        caller: Address,
        beneficiary: Address,
    ) -> Result<Vec<TokenValue>> {
        let mut paid = Vec::new();
        while let Some(entry) = self.ledger.front(beneficiary).cloned() {
            vault.push(beneficiary, &entry)?;
            self.ledger.pop_front(beneficiary);
            paid.push(entry);
        }
        if !paid.is_empty() {
            tracing::info!(
                caller = %caller.short(),
                beneficiary = %beneficiary.short(),
                entries = paid.len(),
                "withdrawal paid out"
            );
        }
        Ok(paid)
    }

    // =================================================================
    // Queries (pure reads)
    // =================================================================

    /// Number of offers ever created.
    #[must_use]
    pub fn total_offers(&self) -> usize {
        self.offers.len()
    }

    /// Look up an offer by id.
    ///
    /// # Errors
    /// `OfferNotFound` for an unknown id.
    pub fn get_offer(&self, id: OfferId) -> Result<&Offer> {
        self.offer_index(id).map(|idx| &self.offers[idx])
    }

    /// Owed entry at `index` in a beneficiary's withdrawal queue.
    #[must_use]
    pub fn pending_withdrawals(&self, beneficiary: Address, index: usize) -> Option<&TokenValue> {
        self.ledger.get(beneficiary, index)
    }

    /// Number of entries owed to a beneficiary.
    #[must_use]
    pub fn pending_count(&self, beneficiary: Address) -> usize {
        self.ledger.count(beneficiary)
    }

    /// The withdrawal ledger (reconciliation queries).
    #[must_use]
    pub fn ledger(&self) -> &PendingLedger {
        &self.ledger
    }

    /// The audit trail of successful transitions, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    // =================================================================
    // Internals
    // =================================================================

    fn offer_index(&self, id: OfferId) -> Result<usize> {
        if id.0 >= 1 && (id.0 as usize) <= self.offers.len() {
            Ok(id.0 as usize - 1)
        } else {
            Err(SwapError::OfferNotFound(id))
        }
    }

    fn check_bundle_len(&self, bundle: &[TokenValue]) -> Result<()> {
        if bundle.len() > self.config.max_bundle_len {
            return Err(SwapError::BundleTooLarge {
                len: bundle.len(),
                max: self.config.max_bundle_len,
            });
        }
        Ok(())
    }

    fn record(&mut self, event: SwapEvent) {
        self.events.push(EventRecord::new(event));
    }
}

impl Default for OfferRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject acting on an offer already in a terminal state.
fn check_open(offer: &Offer) -> Result<()> {
    if offer.acceptor.is_some() {
        return Err(SwapError::AlreadyAccepted(offer.id));
    }
    if offer.canceled {
        return Err(SwapError::AlreadyCanceled(offer.id));
    }
    Ok(())
}

/// The attached native value must exactly equal the bundle's native sum.
fn check_native(bundle: &[TokenValue], attached: Decimal) -> Result<()> {
    let expected = native_total(bundle);
    if attached != expected {
        return Err(SwapError::NativeValueMismatch { expected, attached });
    }
    Ok(())
}

/// Escrow a party's deposit: the attached native value as one native
/// transfer, then every non-native bundle entry.
///
/// Atomic with the enclosing call: on a pull failure, pulls already made
/// are pushed back to the depositor in reverse order and the original
/// error is returned. An unwind failure is unrecoverable and surfaces as
/// `Internal`.
fn escrow_bundle<V: TransferAdapter>(
    vault: &mut V,
    from: Address,
    bundle: &[TokenValue],
    attached_native: Decimal,
) -> Result<()> {
    let native = TokenValue::native(attached_native);
    let deposits = std::iter::once(&native)
        .filter(|tv| !tv.value.is_zero())
        .chain(bundle.iter().filter(|tv| !tv.token_reference.is_native()));

    let mut pulled: Vec<&TokenValue> = Vec::new();
    for value in deposits {
        if let Err(err) = vault.pull(from, value) {
            for done in pulled.into_iter().rev() {
                if let Err(unwind) = vault.push(from, done) {
                    return Err(SwapError::Internal(format!(
                        "escrow unwind failed after `{err}`: {unwind}"
                    )));
                }
            }
            return Err(err);
        }
        pulled.push(value);
    }
    Ok(())
}
