//! Value object trait: equality by value, not identity.
//!
//! Derived figures such as a days-of-supply horizon or a fleet summary have no
//! identity of their own. Two of them with the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "change" one, compute a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Velocity(f64);
///
/// impl ValueObject for Velocity {}
///
/// assert_eq!(Velocity(2.0), Velocity(2.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
