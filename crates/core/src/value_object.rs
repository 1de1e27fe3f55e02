//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket
/// requests for two adults are interchangeable. To "modify" one, build a new
/// one. Construction is where validation happens, so a value object that
/// exists is always valid.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TicketTypeRequest {
///     ticket_type: TicketType,
///     count: u32,
/// }
///
/// impl ValueObject for TicketTypeRequest {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
