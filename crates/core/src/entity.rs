//! Entity trait: records that carry identity through a forecasting pass.

/// Entity marker + minimal interface.
///
/// Within a batch, two entities with the same id describe the same item.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
