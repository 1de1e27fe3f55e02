//! Payment gateway adapters.
//!
//! Implementations of `cinema_ticketing::PaymentProcessor`:
//! - [`TicketPaymentService`]: stand-in for the third-party gateway (logs and accepts)
//! - [`InMemoryPaymentProcessor`]: records charges; can be told to decline

mod in_memory;
mod service;

pub use in_memory::{Charge, InMemoryPaymentProcessor, PaymentError};
pub use service::TicketPaymentService;
