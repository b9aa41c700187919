//! Error types for the core crate.

use std::error::Error;
use std::fmt;

use crate::VariantId;

/// Errors from [`Deck`](crate::Deck) mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A decrement was requested for a variant whose remaining count is
    /// already zero.
    ///
    /// The board excludes depleted variants from every domain before
    /// they can be chosen, so this surfacing at all indicates a
    /// propagation defect, not a solvable board state.
    Depleted {
        /// The variant whose supply was exhausted.
        variant: VariantId,
    },
    /// A count was requested for a variant the catalog never declared.
    UnknownVariant {
        /// The unrecognized variant.
        variant: VariantId,
    },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depleted { variant } => {
                write!(f, "variant {variant} has no remaining supply")
            }
            Self::UnknownVariant { variant } => {
                write!(f, "variant {variant} is not declared by the catalog")
            }
        }
    }
}

impl Error for DeckError {}
