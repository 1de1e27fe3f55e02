//! Ticketing domain module (cinema ticket purchases).
//!
//! This crate contains the business rules for buying tickets: ticket types and
//! their fixed prices, request validation, order aggregation, and the
//! `TicketService` that charges the account and reserves seats through
//! injected collaborators. The rules themselves are deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod error;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod service;
pub mod ticket;

pub use error::PurchaseRejected;
pub use order::{AggregatedOrder, prepare_purchase};
pub use ports::{PaymentProcessor, SeatAllocator};
pub use pricing::{ADULT_PRICE, CHILD_PRICE, INFANT_PRICE, MAX_TICKETS_PER_PURCHASE};
pub use service::{CONFIRMATION_MESSAGE, PurchaseConfirmation, TicketService};
pub use ticket::{RawTicketRequest, TicketType, TicketTypeRequest};
