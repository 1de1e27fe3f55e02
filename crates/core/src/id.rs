//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of the purchasing account.
///
/// Always a positive integer. Raw account numbers arrive signed from callers,
/// so construction goes through [`AccountId::new`], which rejects zero and
/// negative values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(NonZeroU64);

impl AccountId {
    pub fn new(raw: i64) -> DomainResult<Self> {
        u64::try_from(raw)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("AccountId: {raw} is not positive")))
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for u64 {
    fn from(value: AccountId) -> Self {
        value.get()
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("AccountId: {e}")))?;
        Self::new(raw)
    }
}
