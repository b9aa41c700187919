//! The [`VariantId`] identifier type.

use std::fmt;

/// Identifies a tile variant within a catalog.
///
/// Variants are enumerated by the catalog at construction and referred
/// to by ID everywhere else: cell domains, deck counts, and step
/// reports all speak `VariantId`. The ID is opaque to the solver — any
/// meaning (tile kind, rotation, edge labels) lives in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_raw_index() {
        assert_eq!(VariantId(7).to_string(), "7");
    }

    #[test]
    fn ordering_follows_raw_index() {
        assert!(VariantId(1) < VariantId(2));
        assert_eq!(VariantId::from(3u32), VariantId(3));
    }
}
