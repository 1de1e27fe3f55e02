//! Purchase rejection model.

use thiserror::Error;

use cinema_core::DomainError;

use crate::pricing::MAX_TICKETS_PER_PURCHASE;

/// Why a purchase did not go through.
///
/// Every failure is terminal for the call that produced it. The `Display`
/// text is the message shown to the purchaser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseRejected {
    #[error("Invalid request! AccountId must be a valid value.")]
    InvalidAccount,

    #[error("Invalid ticket request! At least one ticket request is required.")]
    NoTickets,

    /// A ticket request failed construction (bad type tag or count).
    #[error("{0}")]
    InvalidTicket(String),

    #[error("Maximum of {max} tickets are allowed at a time!")]
    TicketLimitExceeded { requested: u64, max: u64 },

    #[error("At least one adult ticket is required when purchasing Child or Infant tickets.")]
    AdultRequired,

    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    #[error("Seat reservation failed: {0}")]
    SeatReservationFailed(String),
}

impl PurchaseRejected {
    pub fn ticket_limit_exceeded(requested: u64) -> Self {
        Self::TicketLimitExceeded {
            requested,
            max: MAX_TICKETS_PER_PURCHASE,
        }
    }

    /// An element of the ticket list is not a `{type, count}` request at all.
    pub fn malformed_ticket() -> Self {
        Self::InvalidTicket(
            "Invalid Ticket! Requested ticket is not a ticket type request.".to_string(),
        )
    }

    /// Human-readable reason for the end user.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<DomainError> for PurchaseRejected {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => PurchaseRejected::InvalidTicket(msg),
            DomainError::InvalidId(_) => PurchaseRejected::InvalidAccount,
        }
    }
}
