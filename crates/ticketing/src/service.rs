//! Purchase orchestration.
//!
//! `TicketService` is the only place that decides whether a purchase goes
//! ahead:
//!
//! ```text
//! account id + ticket requests
//!   ↓
//! 1. Validate account id
//!   ↓
//! 2. Validate requests (non-empty, each well-formed)
//!   ↓
//! 3. Aggregate totals
//!   ↓
//! 4. Enforce ticket cap, then accompaniment rule
//!   ↓
//! 5. Charge the account          (PaymentProcessor)
//!   ↓
//! 6. Reserve seats               (SeatAllocator)
//!   ↓
//! PurchaseConfirmation
//! ```
//!
//! Steps 1–4 are pure. Seats are reserved only after payment succeeds, so a
//! failed charge leaves nothing to undo.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use cinema_core::AccountId;

use crate::error::PurchaseRejected;
use crate::order::{AggregatedOrder, prepare_purchase};
use crate::ports::{PaymentProcessor, SeatAllocator};
use crate::ticket::{RawTicketRequest, TicketTypeRequest};

pub const CONFIRMATION_MESSAGE: &str = "Congratulation! Successfully booked your seat.";

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseConfirmation {
    pub message: String,
    pub account_id: AccountId,
    pub total_amount: u64,
    pub total_seats: u64,
    pub total_tickets_booked: u64,
}

impl PurchaseConfirmation {
    fn new(account_id: AccountId, order: &AggregatedOrder) -> Self {
        Self {
            message: CONFIRMATION_MESSAGE.to_string(),
            account_id,
            total_amount: order.total_amount,
            total_seats: order.total_seats,
            total_tickets_booked: order.total_tickets,
        }
    }
}

/// Ticket purchase orchestrator.
///
/// Generic over its collaborators so that callers can plug in the real
/// gateway, a logging stand-in, or a recording fake:
///
/// - `P`: payment capture ([`PaymentProcessor`])
/// - `S`: seat reservation ([`SeatAllocator`])
#[derive(Debug, Clone)]
pub struct TicketService<P, S> {
    payments: P,
    seats: S,
}

impl<P, S> TicketService<P, S> {
    pub fn new(payments: P, seats: S) -> Self {
        Self { payments, seats }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn seats(&self) -> &S {
        &self.seats
    }

    pub fn into_parts(self) -> (P, S) {
        (self.payments, self.seats)
    }
}

impl<P, S> TicketService<P, S>
where
    P: PaymentProcessor,
    S: SeatAllocator,
{
    /// Validate, charge and reserve.
    ///
    /// Returns the first rule that fails. Neither collaborator is called unless
    /// every validation passes, and seats are not reserved if payment fails.
    pub fn purchase(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseConfirmation, PurchaseRejected> {
        let span = tracing::info_span!("purchase", account_id);
        let _enter = span.enter();

        let result = prepare_purchase(account_id, requests).and_then(|(account_id, order)| {
            debug!(
                total_tickets = order.total_tickets,
                total_seats = order.total_seats,
                total_amount = order.total_amount,
                adult_count = order.adult_count,
                child_count = order.child_count,
                infant_count = order.infant_count,
                "aggregated ticket requests"
            );
            self.settle(account_id, &order)
        });

        match &result {
            Ok(confirmation) => info!(
                total_amount = confirmation.total_amount,
                total_seats = confirmation.total_seats,
                total_tickets = confirmation.total_tickets_booked,
                "purchase confirmed"
            ),
            Err(rejection) => warn!(reason = %rejection, "purchase rejected"),
        }

        result
    }

    /// Same as [`purchase`](Self::purchase), for requests that have not been
    /// validated yet. The account id is still checked first; the first
    /// malformed request rejects the whole purchase.
    pub fn purchase_raw(
        &self,
        account_id: i64,
        requests: &[RawTicketRequest],
    ) -> Result<PurchaseConfirmation, PurchaseRejected> {
        if AccountId::new(account_id).is_err() {
            warn!(account_id, "purchase rejected: invalid account");
            return Err(PurchaseRejected::InvalidAccount);
        }

        let requests = requests
            .iter()
            .map(TicketTypeRequest::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!(account_id, reason = %e, "purchase rejected: malformed ticket request");
                PurchaseRejected::from(e)
            })?;

        self.purchase(account_id, &requests)
    }

    fn settle(
        &self,
        account_id: AccountId,
        order: &AggregatedOrder,
    ) -> Result<PurchaseConfirmation, PurchaseRejected> {
        self.payments
            .charge(account_id, order.total_amount)
            .map_err(|e| PurchaseRejected::PaymentFailed(e.to_string()))?;

        self.seats
            .reserve(account_id, order.total_seats)
            .map_err(|e| PurchaseRejected::SeatReservationFailed(e.to_string()))?;

        Ok(PurchaseConfirmation::new(account_id, order))
    }
}
