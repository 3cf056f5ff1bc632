//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one (e.g. `Stability::depleted` returns a fresh
/// value rather than mutating in place).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Stability(f64);
///
/// impl ValueObject for Stability {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
