use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use cinema_core::AccountId;
use cinema_ticketing::PaymentProcessor;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),

    /// Recording failed due to internal lock poisoning.
    #[error("payment ledger unavailable")]
    Poisoned,
}

/// A charge attempt seen by [`InMemoryPaymentProcessor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub reference: Uuid,
    pub account_id: AccountId,
    pub amount: u64,
    pub charged_at: DateTime<Utc>,
    pub accepted: bool,
}

/// In-memory payment processor for tests/dev.
///
/// - No IO
/// - Every attempt is recorded, including declined ones
/// - `failing(reason)` builds a processor that declines every charge
#[derive(Debug, Default)]
pub struct InMemoryPaymentProcessor {
    charges: Mutex<Vec<Charge>>,
    decline_reason: Option<String>,
}

impl InMemoryPaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            charges: Mutex::new(Vec::new()),
            decline_reason: Some(reason.into()),
        }
    }

    /// Snapshot of every recorded attempt, in call order.
    pub fn charges(&self) -> Result<Vec<Charge>, PaymentError> {
        let charges = self.charges.lock().map_err(|_| PaymentError::Poisoned)?;
        Ok(charges.clone())
    }

    /// Sum of accepted charges.
    pub fn total_charged(&self) -> Result<u64, PaymentError> {
        Ok(self
            .charges()?
            .iter()
            .filter(|c| c.accepted)
            .map(|c| c.amount)
            .sum())
    }
}

impl PaymentProcessor for InMemoryPaymentProcessor {
    type Error = PaymentError;

    fn charge(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        let charge = Charge {
            reference: Uuid::now_v7(),
            account_id,
            amount,
            charged_at: Utc::now(),
            accepted: self.decline_reason.is_none(),
        };

        let mut charges = self.charges.lock().map_err(|_| PaymentError::Poisoned)?;
        charges.push(charge.clone());

        match &self.decline_reason {
            Some(reason) => {
                warn!(%account_id, amount, %reason, "payment declined");
                Err(PaymentError::Declined(reason.clone()))
            }
            None => {
                debug!(%account_id, amount, reference = %charge.reference, "payment recorded");
                Ok(())
            }
        }
    }
}
