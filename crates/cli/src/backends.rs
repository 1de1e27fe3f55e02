//! Collaborator selection for the binary.
//!
//! Normally purchases go to the third-party stand-ins. When a failure is
//! simulated through configuration, the matching in-memory fake is used in
//! failing mode instead.

use cinema_core::AccountId;
use cinema_infra::{
    InMemoryPaymentProcessor, InMemorySeatAllocator, PaymentError, SeatReservationError,
    SeatReservationService, TicketPaymentService,
};
use cinema_ticketing::{PaymentProcessor, SeatAllocator, TicketService};

use crate::config::CliConfig;

#[derive(Debug)]
pub enum PaymentBackend {
    ThirdParty(TicketPaymentService),
    Simulated(InMemoryPaymentProcessor),
}

impl PaymentProcessor for PaymentBackend {
    type Error = PaymentError;

    fn charge(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        match self {
            PaymentBackend::ThirdParty(gateway) => match gateway.charge(account_id, amount) {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
            PaymentBackend::Simulated(fake) => fake.charge(account_id, amount),
        }
    }
}

#[derive(Debug)]
pub enum SeatBackend {
    ThirdParty(SeatReservationService),
    Simulated(InMemorySeatAllocator),
}

impl SeatAllocator for SeatBackend {
    type Error = SeatReservationError;

    fn reserve(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        match self {
            SeatBackend::ThirdParty(booking) => match booking.reserve(account_id, seat_count) {
                Ok(()) => Ok(()),
                Err(never) => match never {},
            },
            SeatBackend::Simulated(fake) => fake.reserve(account_id, seat_count),
        }
    }
}

pub fn build_service(config: &CliConfig) -> TicketService<PaymentBackend, SeatBackend> {
    let payments = match &config.simulate_payment_failure {
        Some(reason) => PaymentBackend::Simulated(InMemoryPaymentProcessor::failing(reason.clone())),
        None => PaymentBackend::ThirdParty(TicketPaymentService::new()),
    };
    let seats = match &config.simulate_seat_failure {
        Some(reason) => SeatBackend::Simulated(InMemorySeatAllocator::failing(reason.clone())),
        None => SeatBackend::ThirdParty(SeatReservationService::new()),
    };

    TicketService::new(payments, seats)
}
