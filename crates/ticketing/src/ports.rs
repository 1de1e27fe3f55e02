//! Collaborator capabilities required by [`crate::TicketService`].
//!
//! Both collaborators are opaque external services invoked synchronously.
//! A call either succeeds or returns an error whose `Display` text becomes the
//! purchase rejection reason; nothing is retried.

use std::sync::Arc;

use cinema_core::AccountId;

/// Captures payment for a purchase.
pub trait PaymentProcessor {
    type Error: core::fmt::Display;

    fn charge(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error>;
}

/// Reserves physical seats for a purchase.
pub trait SeatAllocator {
    type Error: core::fmt::Display;

    fn reserve(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error>;
}

macro_rules! forward_payment_processor {
    ($($ptr:ty),*) => {$(
        impl<T> PaymentProcessor for $ptr
        where
            T: PaymentProcessor + ?Sized,
        {
            type Error = T::Error;

            fn charge(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
                (**self).charge(account_id, amount)
            }
        }
    )*};
}

macro_rules! forward_seat_allocator {
    ($($ptr:ty),*) => {$(
        impl<T> SeatAllocator for $ptr
        where
            T: SeatAllocator + ?Sized,
        {
            type Error = T::Error;

            fn reserve(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
                (**self).reserve(account_id, seat_count)
            }
        }
    )*};
}

forward_payment_processor!(&T, Box<T>, Arc<T>);
forward_seat_allocator!(&T, Box<T>, Arc<T>);
