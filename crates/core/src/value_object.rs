//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two payments of
/// `$100.0` are interchangeable; two members named "Alice" are not (members
/// are entities, see [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Payment { amount: Amount }
///
/// impl ValueObject for Payment {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
