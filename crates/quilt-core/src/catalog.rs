//! The [`Catalog`] trait: the tile-set contract consumed by the solver.

use crate::{Direction, VariantId};

/// A finite set of tile variants with per-direction adjacency rules and
/// an initial supply count per variant.
///
/// Concrete catalogs (tile shapes, edge labels, rotations) live outside
/// the solver; the board only consumes this contract, held as a
/// `Box<dyn Catalog>`.
///
/// # Contract
///
/// - `variants()` is stable for the lifetime of the catalog and its
///   order defines the deterministic iteration order of domains.
/// - `compatible(a, b, dir)` must be symmetric across the shared edge:
///   `compatible(a, b, dir) == compatible(b, a, dir.opposite())`. An
///   asymmetric catalog is a caller error the solver does not validate.
/// - `initial_supply` is the count restored by a deck reset.
pub trait Catalog {
    /// Every variant this catalog defines, in canonical order.
    fn variants(&self) -> &[VariantId];

    /// Number of copies of `variant` available before any collapse.
    ///
    /// A variant with zero initial supply never enters any domain.
    fn initial_supply(&self, variant: VariantId) -> u32;

    /// Whether `b` may occupy the cell in direction `dir` from a cell
    /// occupied by `a`.
    fn compatible(&self, a: VariantId, b: VariantId, dir: Direction) -> bool;
}
