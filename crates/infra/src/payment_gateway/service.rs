use std::convert::Infallible;

use tracing::info;

use cinema_core::AccountId;
use cinema_ticketing::PaymentProcessor;

/// Third-party payment gateway stand-in.
///
/// The real gateway takes payment synchronously and never reports failure to
/// the caller, so this adapter only logs the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct TicketPaymentService;

impl TicketPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for TicketPaymentService {
    type Error = Infallible;

    fn charge(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        info!(%account_id, amount, "payment taken");
        Ok(())
    }
}
