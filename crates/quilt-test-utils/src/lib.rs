//! Reusable catalog fixtures for quilt development.
//!
//! Four standard catalogs for solver and policy testing:
//!
//! - [`OpenCatalog`] — every variant tolerates every neighbor.
//! - [`SelfMatchCatalog`] — variants only tolerate themselves; any
//!   collapse forces a uniform board.
//! - [`HostilePair`] — two variants that tolerate nothing, including
//!   themselves; any collapse on a connected board is a contradiction.
//! - [`EdgeCatalog`] — adjacency by per-direction edge labels, the
//!   shape production catalogs take.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use quilt_core::{Catalog, Direction, VariantId};

fn ids(count: u32) -> Vec<VariantId> {
    (0..count).map(VariantId).collect()
}

fn direction_slot(dir: Direction) -> usize {
    match dir {
        Direction::North => 0,
        Direction::East => 1,
        Direction::South => 2,
        Direction::West => 3,
    }
}

/// `count` variants, each with the same supply, all mutually compatible.
///
/// Useful for exercising entropy, deck, and policy behavior without
/// adjacency effects.
pub struct OpenCatalog {
    variants: Vec<VariantId>,
    supply: u32,
}

impl OpenCatalog {
    pub fn new(count: u32, supply: u32) -> Self {
        Self {
            variants: ids(count),
            supply,
        }
    }

    /// Same catalog with per-variant supplies.
    pub fn with_supplies(supplies: Vec<u32>) -> SuppliedCatalog {
        SuppliedCatalog {
            variants: ids(supplies.len() as u32),
            supplies,
        }
    }
}

impl Catalog for OpenCatalog {
    fn variants(&self) -> &[VariantId] {
        &self.variants
    }

    fn initial_supply(&self, _: VariantId) -> u32 {
        self.supply
    }

    fn compatible(&self, _: VariantId, _: VariantId, _: Direction) -> bool {
        true
    }
}

/// Like [`OpenCatalog`] but with an explicit supply per variant.
pub struct SuppliedCatalog {
    variants: Vec<VariantId>,
    supplies: Vec<u32>,
}

impl Catalog for SuppliedCatalog {
    fn variants(&self) -> &[VariantId] {
        &self.variants
    }

    fn initial_supply(&self, variant: VariantId) -> u32 {
        self.supplies[variant.0 as usize]
    }

    fn compatible(&self, _: VariantId, _: VariantId, _: Direction) -> bool {
        true
    }
}

/// Variants that only tolerate themselves in every direction.
///
/// Collapsing any cell forces the whole connected board to the same
/// variant, which makes propagation reach easy to assert.
pub struct SelfMatchCatalog {
    variants: Vec<VariantId>,
    supply: u32,
}

impl SelfMatchCatalog {
    pub fn new(count: u32, supply: u32) -> Self {
        Self {
            variants: ids(count),
            supply,
        }
    }
}

impl Catalog for SelfMatchCatalog {
    fn variants(&self) -> &[VariantId] {
        &self.variants
    }

    fn initial_supply(&self, _: VariantId) -> u32 {
        self.supply
    }

    fn compatible(&self, a: VariantId, b: VariantId, _: Direction) -> bool {
        a == b
    }
}

/// Two variants incompatible with everything, themselves included.
///
/// On any board with at least one adjacency, the first collapse empties
/// a neighboring domain: the canonical contradiction fixture.
pub struct HostilePair {
    variants: Vec<VariantId>,
    supply: u32,
}

impl HostilePair {
    pub fn new(supply: u32) -> Self {
        Self {
            variants: ids(2),
            supply,
        }
    }
}

impl Catalog for HostilePair {
    fn variants(&self) -> &[VariantId] {
        &self.variants
    }

    fn initial_supply(&self, _: VariantId) -> u32 {
        self.supply
    }

    fn compatible(&self, _: VariantId, _: VariantId, _: Direction) -> bool {
        false
    }
}

/// One tile variant defined by its four edge labels, N/E/S/W order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSpec {
    /// Edge labels indexed north, east, south, west.
    pub edges: [u8; 4],
    pub supply: u32,
}

impl TileSpec {
    pub fn new(edges: [u8; 4], supply: u32) -> Self {
        Self { edges, supply }
    }
}

/// Adjacency by edge-label matching: `b` may sit in direction `dir`
/// from `a` iff `a`'s `dir` edge label equals `b`'s opposite edge
/// label. This construction is symmetric across the shared edge by
/// definition, satisfying the [`Catalog`] contract.
pub struct EdgeCatalog {
    variants: Vec<VariantId>,
    specs: Vec<TileSpec>,
}

impl EdgeCatalog {
    pub fn new(specs: Vec<TileSpec>) -> Self {
        Self {
            variants: ids(specs.len() as u32),
            specs,
        }
    }

    pub fn spec(&self, variant: VariantId) -> &TileSpec {
        &self.specs[variant.0 as usize]
    }
}

impl Catalog for EdgeCatalog {
    fn variants(&self) -> &[VariantId] {
        &self.variants
    }

    fn initial_supply(&self, variant: VariantId) -> u32 {
        self.specs[variant.0 as usize].supply
    }

    fn compatible(&self, a: VariantId, b: VariantId, dir: Direction) -> bool {
        let a_edge = self.specs[a.0 as usize].edges[direction_slot(dir)];
        let b_edge = self.specs[b.0 as usize].edges[direction_slot(dir.opposite())];
        a_edge == b_edge
    }
}

/// A small two-terrain catalog: all-grass, all-sea, and the four
/// straight coast tiles between them. Arc-consistent from a full
/// domain, so it exercises realistic propagation chains.
pub fn coastline_catalog(supply: u32) -> EdgeCatalog {
    const GRASS: u8 = 0;
    const SEA: u8 = 1;
    EdgeCatalog::new(vec![
        // [N, E, S, W]
        TileSpec::new([GRASS, GRASS, GRASS, GRASS], supply),
        TileSpec::new([SEA, SEA, SEA, SEA], supply),
        TileSpec::new([GRASS, SEA, SEA, SEA], supply),
        TileSpec::new([SEA, GRASS, SEA, SEA], supply),
        TileSpec::new([SEA, SEA, GRASS, SEA], supply),
        TileSpec::new([SEA, SEA, SEA, GRASS], supply),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_catalog_matches_shared_edges() {
        let catalog = coastline_catalog(1);
        let grass = VariantId(0);
        let sea = VariantId(1);
        // Sea east of grass: grass's east edge is GRASS, sea's west
        // edge is SEA.
        assert_eq!(catalog.spec(grass).edges, [0, 0, 0, 0]);
        assert_eq!(catalog.spec(sea).edges, [1, 1, 1, 1]);
        assert!(!catalog.compatible(grass, sea, Direction::East));
        assert!(catalog.compatible(sea, sea, Direction::East));
        assert!(catalog.compatible(grass, grass, Direction::North));
    }

    #[test]
    fn edge_catalog_is_symmetric_across_the_edge() {
        let catalog = coastline_catalog(1);
        for &a in catalog.variants() {
            for &b in catalog.variants() {
                for dir in Direction::ALL {
                    assert_eq!(
                        catalog.compatible(a, b, dir),
                        catalog.compatible(b, a, dir.opposite()),
                        "asymmetry for {a}, {b}, {dir}"
                    );
                }
            }
        }
    }

    #[test]
    fn hostile_pair_rejects_everything() {
        let catalog = HostilePair::new(3);
        for &a in catalog.variants() {
            for &b in catalog.variants() {
                for dir in Direction::ALL {
                    assert!(!catalog.compatible(a, b, dir));
                }
            }
        }
    }

    #[test]
    fn supplied_catalog_reports_per_variant_supply() {
        let catalog = OpenCatalog::with_supplies(vec![3, 0, 7]);
        assert_eq!(catalog.initial_supply(VariantId(0)), 3);
        assert_eq!(catalog.initial_supply(VariantId(1)), 0);
        assert_eq!(catalog.initial_supply(VariantId(2)), 7);
    }
}
