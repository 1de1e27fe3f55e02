//! Infrastructure layer: adapters for the services a purchase depends on.
//!
//! Each collaborator port from `cinema-ticketing` gets two implementations:
//! a logging stand-in for the third-party service, and a recording in-memory
//! fake for tests/dev.

pub mod payment_gateway;
pub mod seat_booking;

pub use payment_gateway::{Charge, InMemoryPaymentProcessor, PaymentError, TicketPaymentService};
pub use seat_booking::{
    InMemorySeatAllocator, Reservation, SeatReservationError, SeatReservationService,
};
