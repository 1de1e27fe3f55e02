//! Seat booking adapters.
//!
//! Implementations of `cinema_ticketing::SeatAllocator`:
//! - [`SeatReservationService`]: stand-in for the third-party booking service
//! - [`InMemorySeatAllocator`]: records reservations against an optional capacity

mod in_memory;
mod service;

pub use in_memory::{InMemorySeatAllocator, Reservation, SeatReservationError};
pub use service::SeatReservationService;
