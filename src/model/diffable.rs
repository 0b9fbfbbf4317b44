//! Capability contract for items shown in a diffable list.

/// An item that can be reconciled against another revision of itself.
///
/// Implementors provide two comparisons:
/// - **identity**: the same logical entity (e.g. the same primary key),
///   regardless of field values
/// - **content**: every displayed field matches
///
/// Content equality is only consulted for identity-matched pairs, so it
/// may assume `same_item` already holds.
pub trait Diffable {
    /// True when `other` represents the same logical entity as `self`,
    /// independent of field values.
    fn same_item(&self, other: &Self) -> bool;

    /// True when every displayed field of `other` matches `self`.
    ///
    /// Only called for pairs where [`Diffable::same_item`] holds.
    fn same_content(&self, other: &Self) -> bool;

    /// Opaque tag selecting the rendering template for this item.
    ///
    /// The diff algorithm never consults this; the presentation layer
    /// keys templates off it. Single-template lists can keep the
    /// default.
    fn view_tag(&self) -> u32 {
        0
    }
}
