use std::convert::Infallible;

use tracing::info;

use cinema_core::AccountId;
use cinema_ticketing::SeatAllocator;

/// Third-party seat booking stand-in. Logs the reservation and accepts it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeatReservationService;

impl SeatReservationService {
    pub fn new() -> Self {
        Self
    }
}

impl SeatAllocator for SeatReservationService {
    type Error = Infallible;

    fn reserve(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        info!(%account_id, seat_count, "seats reserved");
        Ok(())
    }
}
