//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same field
/// values are the same thing. Items, weapons and transaction records in this
/// workspace are all value objects; mutation happens through explicit
/// methods on an owned value, never through shared references.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Coin { weight: f64 }
///
/// impl ValueObject for Coin {}
///
/// assert_eq!(Coin { weight: 0.1 }, Coin { weight: 0.1 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
