//! Error types for board construction and stepping.

use std::error::Error;
use std::fmt;

use quilt_core::VariantId;

/// Errors detected while constructing a [`Board`](crate::Board).
///
/// Catalog misconfiguration is reported here, at construction time,
/// never mid-solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The catalog declares zero variants.
    EmptyCatalog,
    /// The catalog declares variants but zero total supply, so no cell
    /// could ever collapse.
    NoSupply,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "catalog declares no variants"),
            Self::NoSupply => write!(f, "catalog declares zero total supply"),
        }
    }
}

impl Error for BoardError {}

/// Errors from [`Board::step`](crate::Board::step) and
/// [`Board::collapse_at`](crate::Board::collapse_at).
///
/// `Contradiction` is deliberately absent: an emptied domain is an
/// expected solver outcome surfaced through
/// [`StepOutcome`](crate::StepOutcome), not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A variant selected for collapse had zero remaining supply.
    ///
    /// This is an internal-consistency failure: propagation is supposed
    /// to keep depleted variants out of every domain. The step is
    /// aborted before the deck or any cell is mutated.
    Depleted {
        /// The depleted variant.
        variant: VariantId,
        /// Row of the cell being collapsed.
        row: usize,
        /// Column of the cell being collapsed.
        col: usize,
    },
    /// A forced collapse addressed a cell outside the grid.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// A forced collapse addressed a cell that is already collapsed.
    AlreadyCollapsed {
        /// Row of the collapsed cell.
        row: usize,
        /// Column of the collapsed cell.
        col: usize,
    },
    /// A forced collapse named a variant not in the target cell's domain.
    NotInDomain {
        /// The rejected variant.
        variant: VariantId,
        /// Row of the target cell.
        row: usize,
        /// Column of the target cell.
        col: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depleted { variant, row, col } => write!(
                f,
                "variant {variant} chosen for cell ({row}, {col}) has no remaining supply"
            ),
            Self::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
            Self::AlreadyCollapsed { row, col } => {
                write!(f, "cell ({row}, {col}) is already collapsed")
            }
            Self::NotInDomain { variant, row, col } => write!(
                f,
                "variant {variant} is not in the domain of cell ({row}, {col})"
            ),
        }
    }
}

impl Error for StepError {}
