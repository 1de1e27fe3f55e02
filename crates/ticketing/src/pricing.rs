//! Fixed per-type prices and the per-purchase ticket cap.

use crate::ticket::TicketType;

pub const ADULT_PRICE: u64 = 20;
pub const CHILD_PRICE: u64 = 10;
pub const INFANT_PRICE: u64 = 0;

/// Upper bound on tickets of all types in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 25;

impl TicketType {
    pub const fn unit_price(self) -> u64 {
        match self {
            TicketType::Adult => ADULT_PRICE,
            TicketType::Child => CHILD_PRICE,
            TicketType::Infant => INFANT_PRICE,
        }
    }

    /// Infants sit on an adult's lap.
    pub const fn occupies_seat(self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infants_are_free_and_seatless() {
        assert_eq!(TicketType::Infant.unit_price(), 0);
        assert!(!TicketType::Infant.occupies_seat());
    }

    #[test]
    fn adults_and_children_pay_and_take_a_seat() {
        assert_eq!(TicketType::Adult.unit_price(), ADULT_PRICE);
        assert_eq!(TicketType::Child.unit_price(), CHILD_PRICE);
        assert!(TicketType::Adult.occupies_seat());
        assert!(TicketType::Child.occupies_seat());
    }
}
