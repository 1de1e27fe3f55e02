//! Order aggregation and the pure purchase rules.

use serde::{Deserialize, Serialize};

use cinema_core::AccountId;

use crate::error::PurchaseRejected;
use crate::pricing::MAX_TICKETS_PER_PURCHASE;
use crate::ticket::{TicketType, TicketTypeRequest};

/// Totals derived from a list of ticket requests.
///
/// Transient: computed fresh for every purchase and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedOrder {
    pub total_tickets: u64,
    /// Adults and children; infants do not get a seat.
    pub total_seats: u64,
    pub total_amount: u64,
    pub adult_count: u64,
    pub child_count: u64,
    pub infant_count: u64,
}

impl AggregatedOrder {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut order, request| {
            order.add(request);
            order
        })
    }

    fn add(&mut self, request: &TicketTypeRequest) {
        let count = u64::from(request.count());
        let ticket_type = request.ticket_type();

        match ticket_type {
            TicketType::Adult => self.adult_count += count,
            TicketType::Child => self.child_count += count,
            TicketType::Infant => self.infant_count += count,
        }

        self.total_tickets += count;
        if ticket_type.occupies_seat() {
            self.total_seats += count;
        }
        self.total_amount += count * ticket_type.unit_price();
    }

    /// Children and infants may not be booked without an adult.
    pub fn has_unaccompanied_minors(&self) -> bool {
        self.adult_count == 0 && self.child_count + self.infant_count > 0
    }

    /// Check the cap first, then the accompaniment rule.
    pub fn validate(&self) -> Result<(), PurchaseRejected> {
        if self.total_tickets > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseRejected::ticket_limit_exceeded(self.total_tickets));
        }

        if self.has_unaccompanied_minors() {
            return Err(PurchaseRejected::AdultRequired);
        }

        Ok(())
    }
}

/// Run every purchase rule that does not touch a collaborator.
///
/// Checks, in order: the account id, that at least one request was made, the
/// ticket cap, and the accompaniment rule. Deterministic and side-effect free.
pub fn prepare_purchase(
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<(AccountId, AggregatedOrder), PurchaseRejected> {
    let account_id = AccountId::new(account_id).map_err(|_| PurchaseRejected::InvalidAccount)?;

    if requests.is_empty() {
        return Err(PurchaseRejected::NoTickets);
    }

    let order = AggregatedOrder::from_requests(requests);
    order.validate()?;

    Ok((account_id, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{ADULT_PRICE, CHILD_PRICE};
    use proptest::prelude::*;

    fn req(ticket_type: TicketType, count: u32) -> TicketTypeRequest {
        TicketTypeRequest::new(ticket_type, count).unwrap()
    }

    #[test]
    fn aggregates_mixed_request() {
        let order = AggregatedOrder::from_requests(&[
            req(TicketType::Adult, 2),
            req(TicketType::Child, 4),
            req(TicketType::Infant, 1),
        ]);

        assert_eq!(order.total_tickets, 7);
        assert_eq!(order.total_seats, 6);
        assert_eq!(order.total_amount, 2 * ADULT_PRICE + 4 * CHILD_PRICE);
        assert_eq!(order.adult_count, 2);
        assert_eq!(order.child_count, 4);
        assert_eq!(order.infant_count, 1);
    }

    #[test]
    fn repeated_types_are_summed() {
        let order = AggregatedOrder::from_requests(&[
            req(TicketType::Adult, 1),
            req(TicketType::Adult, 3),
        ]);
        assert_eq!(order.adult_count, 4);
        assert_eq!(order.total_amount, 4 * ADULT_PRICE);
    }

    #[test]
    fn exactly_the_cap_is_allowed() {
        let order = AggregatedOrder::from_requests(&[
            req(TicketType::Adult, 10),
            req(TicketType::Child, 10),
            req(TicketType::Infant, 5),
        ]);
        assert_eq!(order.total_tickets, MAX_TICKETS_PER_PURCHASE);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn over_the_cap_is_rejected() {
        let order = AggregatedOrder::from_requests(&[
            req(TicketType::Adult, 11),
            req(TicketType::Infant, 10),
            req(TicketType::Child, 15),
        ]);
        assert_eq!(
            order.validate().unwrap_err(),
            PurchaseRejected::TicketLimitExceeded { requested: 36, max: 25 }
        );
    }

    #[test]
    fn cap_is_checked_before_accompaniment() {
        let order = AggregatedOrder::from_requests(&[req(TicketType::Child, 30)]);
        assert!(matches!(
            order.validate().unwrap_err(),
            PurchaseRejected::TicketLimitExceeded { .. }
        ));
    }

    #[test]
    fn minors_without_adult_are_rejected() {
        let order = AggregatedOrder::from_requests(&[
            req(TicketType::Infant, 2),
            req(TicketType::Child, 3),
        ]);
        assert_eq!(order.validate().unwrap_err(), PurchaseRejected::AdultRequired);

        let infants_only = AggregatedOrder::from_requests(&[req(TicketType::Infant, 1)]);
        assert_eq!(infants_only.validate().unwrap_err(), PurchaseRejected::AdultRequired);
    }

    #[test]
    fn prepare_rejects_bad_account_before_anything_else() {
        for account_id in [0, -1] {
            let err = prepare_purchase(account_id, &[]).unwrap_err();
            assert_eq!(err, PurchaseRejected::InvalidAccount);
        }
    }

    #[test]
    fn prepare_rejects_empty_request_list() {
        assert_eq!(prepare_purchase(1, &[]).unwrap_err(), PurchaseRejected::NoTickets);
    }

    fn ticket_mix() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(
            (prop::sample::select(TicketType::ALL.to_vec()), 1u32..10),
            1..8,
        )
        .prop_map(|lines| {
            lines
                .into_iter()
                .map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, count).unwrap())
                .collect()
        })
    }

    /// Per-type counts summing past the cap, each split across one or two lines.
    fn over_cap_mix() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        (0u32..=30, 0u32..=30, 0u32..=30, any::<bool>())
            .prop_filter("total must exceed the cap", |(a, c, i, _)| {
                u64::from(a + c + i) > MAX_TICKETS_PER_PURCHASE
            })
            .prop_map(|(adults, children, infants, split)| {
                let mut requests = Vec::new();
                for (ticket_type, count) in [
                    (TicketType::Adult, adults),
                    (TicketType::Child, children),
                    (TicketType::Infant, infants),
                ] {
                    if count == 0 {
                        continue;
                    }
                    if split && count > 1 {
                        requests.push(req(ticket_type, count / 2));
                        requests.push(req(ticket_type, count - count / 2));
                    } else {
                        requests.push(req(ticket_type, count));
                    }
                }
                requests
            })
    }

    #[test]
    fn over_cap_without_adults_hits_cap_error() {
        let err = prepare_purchase(1, &[req(TicketType::Child, 20), req(TicketType::Infant, 6)])
            .unwrap_err();
        assert_eq!(err, PurchaseRejected::TicketLimitExceeded { requested: 26, max: 25 });
    }

    #[test]
    fn over_cap_adults_only_hits_cap_error() {
        let err = prepare_purchase(1, &[req(TicketType::Adult, 26)]).unwrap_err();
        assert_eq!(err, PurchaseRejected::TicketLimitExceeded { requested: 26, max: 25 });
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals always follow the per-type arithmetic.
        #[test]
        fn totals_follow_pricing_rules(requests in ticket_mix()) {
            let order = AggregatedOrder::from_requests(&requests);

            let count_of = |t: TicketType| -> u64 {
                requests
                    .iter()
                    .filter(|r| r.ticket_type() == t)
                    .map(|r| u64::from(r.count()))
                    .sum()
            };
            let adults = count_of(TicketType::Adult);
            let children = count_of(TicketType::Child);
            let infants = count_of(TicketType::Infant);

            prop_assert_eq!(order.total_tickets, adults + children + infants);
            prop_assert_eq!(order.total_seats, adults + children);
            prop_assert_eq!(order.total_amount, adults * ADULT_PRICE + children * CHILD_PRICE);
            prop_assert_eq!(order.adult_count, adults);
        }

        /// Property: anything over the cap is rejected with the cap error,
        /// whatever the mix (adults only, no adults, any split).
        #[test]
        fn over_cap_always_hits_cap_error(requests in over_cap_mix()) {
            let total: u64 = requests.iter().map(|r| u64::from(r.count())).sum();
            let err = prepare_purchase(1, &requests).unwrap_err();
            prop_assert_eq!(
                err,
                PurchaseRejected::TicketLimitExceeded {
                    requested: total,
                    max: MAX_TICKETS_PER_PURCHASE,
                }
            );
        }

        /// Property: aggregation is deterministic.
        #[test]
        fn preparation_is_deterministic(account_id in 1i64..10_000, requests in ticket_mix()) {
            prop_assert_eq!(
                prepare_purchase(account_id, &requests),
                prepare_purchase(account_id, &requests)
            );
        }
    }
}
