//! Purchase request DTO and the single command the binary runs.

use std::process::ExitCode;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use cinema_ticketing::{PurchaseConfirmation, PurchaseRejected, RawTicketRequest};

use crate::backends::build_service;
use crate::config::CliConfig;

/// `{"accountId": 1, "tickets": [{"type": "ADULT", "count": 2}]}`
///
/// Both fields are kept as raw JSON so that a wrong shape (a string account
/// id, a fractional count, a ticket that is not an object) is reported as a
/// purchase rejection rather than a parse error. Only malformed JSON syntax
/// fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub account_id: Value,
    #[serde(default)]
    pub tickets: Value,
}

impl PurchaseRequest {
    /// The account id, if it is a positive integer.
    pub fn account_id(&self) -> Result<i64, PurchaseRejected> {
        self.account_id
            .as_i64()
            .filter(|id| *id > 0)
            .ok_or(PurchaseRejected::InvalidAccount)
    }

    /// Decode every ticket line into its unvalidated wire form.
    ///
    /// A missing or `null` list is empty; a non-array list or an element that
    /// is not `{type: string, count: integer}` is a malformed ticket.
    pub fn ticket_lines(&self) -> Result<Vec<RawTicketRequest>, PurchaseRejected> {
        match &self.tickets {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    RawTicketRequest::deserialize(item)
                        .map_err(|_| PurchaseRejected::malformed_ticket())
                })
                .collect(),
            _ => Err(PurchaseRejected::malformed_ticket()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed(PurchaseConfirmation),
    Rejected(PurchaseRejected),
}

impl Outcome {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Outcome::Confirmed(confirmation) => json!(confirmation),
            Outcome::Rejected(rejection) => json!({
                "error": "purchase_rejected",
                "message": rejection.reason(),
            }),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Confirmed(_) => ExitCode::SUCCESS,
            Outcome::Rejected(_) => ExitCode::FAILURE,
        }
    }
}

/// Parse `input` and run it through a `TicketService` wired per `config`.
///
/// Malformed JSON is an error. A rejected purchase, including a request whose
/// fields have the wrong shape, is a normal [`Outcome`]. The account id is
/// checked before the tickets are looked at.
pub fn run(config: &CliConfig, input: &str) -> anyhow::Result<Outcome> {
    let request: PurchaseRequest =
        serde_json::from_str(input).context("invalid purchase request JSON")?;

    let prepared = request.account_id().and_then(|account_id| {
        request
            .ticket_lines()
            .map(|tickets| (account_id, tickets))
    });
    let (account_id, tickets) = match prepared {
        Ok(prepared) => prepared,
        Err(rejection) => {
            tracing::warn!(reason = %rejection, "purchase request rejected at the boundary");
            return Ok(Outcome::Rejected(rejection));
        }
    };

    tracing::debug!(account_id, lines = tickets.len(), "purchase request received");

    let service = build_service(config);
    Ok(match service.purchase_raw(account_id, &tickets) {
        Ok(confirmation) => Outcome::Confirmed(confirmation),
        Err(rejection) => Outcome::Rejected(rejection),
    })
}
