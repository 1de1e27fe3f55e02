use core::str::FromStr;
use serde::{Deserialize, Serialize};

use cinema_core::{DomainError, DomainResult, ValueObject};

/// Ticket category. Each category has its own price and seating rule
/// (see [`crate::pricing`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(TicketType::Adult),
            "CHILD" => Ok(TicketType::Child),
            "INFANT" => Ok(TicketType::Infant),
            _ => Err(DomainError::validation("type must be ADULT, CHILD, or INFANT")),
        }
    }
}

/// A request for `count` tickets of one type.
///
/// Immutable once built; both constructors reject a zero count, so every
/// instance is a valid line of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketRequest", into = "RawTicketRequest")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl ValueObject for TicketTypeRequest {}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, count: u32) -> DomainResult<Self> {
        if count == 0 {
            return Err(invalid_count());
        }
        Ok(Self { ticket_type, count })
    }

    /// Build a request from an untyped tag and a signed count, as received
    /// from outside the process.
    pub fn parse(ticket_type: &str, count: i64) -> DomainResult<Self> {
        let ticket_type = ticket_type.parse::<TicketType>()?;
        let count = u32::try_from(count).map_err(|_| invalid_count())?;
        Self::new(ticket_type, count)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

fn invalid_count() -> DomainError {
    DomainError::validation("Invalid number of tickets!")
}

/// Unvalidated wire form of a ticket request: `{"type": "ADULT", "count": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTicketRequest {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub count: i64,
}

impl RawTicketRequest {
    pub fn new(ticket_type: impl Into<String>, count: i64) -> Self {
        Self {
            ticket_type: ticket_type.into(),
            count,
        }
    }
}

impl TryFrom<RawTicketRequest> for TicketTypeRequest {
    type Error = DomainError;

    fn try_from(value: RawTicketRequest) -> Result<Self, Self::Error> {
        Self::parse(&value.ticket_type, value.count)
    }
}

impl TryFrom<&RawTicketRequest> for TicketTypeRequest {
    type Error = DomainError;

    fn try_from(value: &RawTicketRequest) -> Result<Self, Self::Error> {
        Self::parse(&value.ticket_type, value.count)
    }
}

impl From<TicketTypeRequest> for RawTicketRequest {
    fn from(value: TicketTypeRequest) -> Self {
        Self {
            ticket_type: value.ticket_type.as_str().to_string(),
            count: i64::from(value.count),
        }
    }
}
