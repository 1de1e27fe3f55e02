use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use cinema_core::AccountId;
use cinema_ticketing::SeatAllocator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatReservationError {
    #[error("seat reservation refused: {0}")]
    Refused(String),

    #[error("only {available} seats left, {requested} requested")]
    InsufficientSeats { requested: u64, available: u64 },

    /// Recording failed due to internal lock poisoning.
    #[error("seat map unavailable")]
    Poisoned,
}

/// A successful reservation held by [`InMemorySeatAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seat_count: u64,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct SeatMap {
    reservations: Vec<Reservation>,
    reserved: u64,
}

/// In-memory seat allocator for tests/dev.
///
/// Unbounded by default. `with_capacity(n)` refuses any reservation that would
/// take the total past `n`; `failing(reason)` refuses everything.
#[derive(Debug, Default)]
pub struct InMemorySeatAllocator {
    seats: Mutex<SeatMap>,
    capacity: Option<u64>,
    refusal: Option<String>,
}

impl InMemorySeatAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            refusal: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn reservations(&self) -> Result<Vec<Reservation>, SeatReservationError> {
        let seats = self.seats.lock().map_err(|_| SeatReservationError::Poisoned)?;
        Ok(seats.reservations.clone())
    }

    pub fn seats_reserved(&self) -> Result<u64, SeatReservationError> {
        let seats = self.seats.lock().map_err(|_| SeatReservationError::Poisoned)?;
        Ok(seats.reserved)
    }
}

impl SeatAllocator for InMemorySeatAllocator {
    type Error = SeatReservationError;

    fn reserve(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        if let Some(reason) = &self.refusal {
            warn!(%account_id, seat_count, %reason, "seat reservation refused");
            return Err(SeatReservationError::Refused(reason.clone()));
        }

        let mut seats = self.seats.lock().map_err(|_| SeatReservationError::Poisoned)?;

        if let Some(capacity) = self.capacity {
            let available = capacity.saturating_sub(seats.reserved);
            if seat_count > available {
                warn!(%account_id, seat_count, available, "not enough seats");
                return Err(SeatReservationError::InsufficientSeats {
                    requested: seat_count,
                    available,
                });
            }
        }

        seats.reserved += seat_count;
        seats.reservations.push(Reservation {
            account_id,
            seat_count,
            reserved_at: Utc::now(),
        });
        debug!(%account_id, seat_count, total_reserved = seats.reserved, "seats recorded");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64) -> AccountId {
        AccountId::new(id).unwrap()
    }

    #[test]
    fn records_reservations_in_order() {
        let allocator = InMemorySeatAllocator::new();
        allocator.reserve(account(1), 6).unwrap();
        allocator.reserve(account(2), 1).unwrap();

        let reservations = allocator.reservations().unwrap();
        assert_eq!(reservations.len(), 2);
        assert_eq!(reservations[0].account_id, account(1));
        assert_eq!(reservations[0].seat_count, 6);
        assert_eq!(allocator.seats_reserved().unwrap(), 7);
    }

    #[test]
    fn capacity_is_enforced() {
        let allocator = InMemorySeatAllocator::with_capacity(10);
        allocator.reserve(account(1), 8).unwrap();

        let err = allocator.reserve(account(2), 3).unwrap_err();
        assert_eq!(
            err,
            SeatReservationError::InsufficientSeats {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(allocator.seats_reserved().unwrap(), 8);

        allocator.reserve(account(2), 2).unwrap();
        assert_eq!(allocator.seats_reserved().unwrap(), 10);
    }

    #[test]
    fn poisoned_seat_map_is_reported_not_read_as_empty() {
        let allocator = InMemorySeatAllocator::new();
        allocator.reserve(account(1), 2).unwrap();

        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = allocator.seats.lock().unwrap();
                    panic!("poison the seat map");
                })
                .join();
        });

        assert_eq!(allocator.reservations().unwrap_err(), SeatReservationError::Poisoned);
        assert_eq!(allocator.seats_reserved().unwrap_err(), SeatReservationError::Poisoned);
        assert_eq!(allocator.reserve(account(1), 1).unwrap_err(), SeatReservationError::Poisoned);
    }

    #[test]
    fn failing_allocator_refuses_everything() {
        let allocator = InMemorySeatAllocator::failing("screen closed");
        let err = allocator.reserve(account(1), 1).unwrap_err();
        assert_eq!(err.to_string(), "seat reservation refused: screen closed");
        assert!(allocator.reservations().unwrap().is_empty());
    }
}
