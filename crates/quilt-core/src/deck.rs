//! The [`Deck`]: remaining tile supply per variant.

use indexmap::IndexMap;

use crate::{Catalog, DeckError, VariantId};

/// Tracks how many copies of each tile variant remain.
///
/// A deck is built from a catalog's declared initial supplies and is
/// decremented by the board each time a cell collapses. Counts never go
/// negative: decrementing a depleted variant is an error, and the board
/// keeps depleted variants out of every domain so it cannot happen on a
/// correctly propagated board.
///
/// Counts iterate in catalog order, which keeps supply-weighted draws
/// and displayed tallies deterministic.
#[derive(Clone, Debug)]
pub struct Deck {
    initial: IndexMap<VariantId, u32>,
    remaining: IndexMap<VariantId, u32>,
}

impl Deck {
    /// Build a deck holding each variant's catalog-declared supply.
    pub fn new(catalog: &dyn Catalog) -> Self {
        let initial: IndexMap<VariantId, u32> = catalog
            .variants()
            .iter()
            .map(|&v| (v, catalog.initial_supply(v)))
            .collect();
        let remaining = initial.clone();
        Self { initial, remaining }
    }

    /// Remaining copies of `variant`. Zero for variants the catalog
    /// never declared.
    pub fn remaining(&self, variant: VariantId) -> u32 {
        self.remaining.get(&variant).copied().unwrap_or(0)
    }

    /// Sum of remaining copies across all variants.
    pub fn total_remaining(&self) -> u64 {
        self.remaining.values().map(|&n| u64::from(n)).sum()
    }

    /// Remaining counts per variant, in catalog order.
    pub fn counts(&self) -> impl Iterator<Item = (VariantId, u32)> + '_ {
        self.remaining.iter().map(|(&v, &n)| (v, n))
    }

    /// Consume one copy of `variant`.
    ///
    /// # Errors
    ///
    /// [`DeckError::Depleted`] if no copies remain, or
    /// [`DeckError::UnknownVariant`] if the catalog never declared it.
    /// Either way the deck is left unchanged.
    pub fn decrement(&mut self, variant: VariantId) -> Result<(), DeckError> {
        let count = self
            .remaining
            .get_mut(&variant)
            .ok_or(DeckError::UnknownVariant { variant })?;
        if *count == 0 {
            return Err(DeckError::Depleted { variant });
        }
        *count -= 1;
        Ok(())
    }

    /// Restore every count to its catalog-declared initial value.
    pub fn reset(&mut self) {
        self.remaining = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use proptest::prelude::*;

    /// Minimal in-module catalog: `supplies[i]` copies of variant `i`,
    /// everything mutually compatible.
    struct CountedCatalog {
        ids: Vec<VariantId>,
        supplies: Vec<u32>,
    }

    impl CountedCatalog {
        fn new(supplies: Vec<u32>) -> Self {
            let ids = (0..supplies.len() as u32).map(VariantId).collect();
            Self { ids, supplies }
        }
    }

    impl Catalog for CountedCatalog {
        fn variants(&self) -> &[VariantId] {
            &self.ids
        }

        fn initial_supply(&self, variant: VariantId) -> u32 {
            self.supplies[variant.0 as usize]
        }

        fn compatible(&self, _: VariantId, _: VariantId, _: Direction) -> bool {
            true
        }
    }

    #[test]
    fn new_copies_initial_supplies() {
        let deck = Deck::new(&CountedCatalog::new(vec![3, 0, 5]));
        assert_eq!(deck.remaining(VariantId(0)), 3);
        assert_eq!(deck.remaining(VariantId(1)), 0);
        assert_eq!(deck.remaining(VariantId(2)), 5);
        assert_eq!(deck.total_remaining(), 8);
    }

    #[test]
    fn decrement_consumes_one_copy() {
        let mut deck = Deck::new(&CountedCatalog::new(vec![2]));
        deck.decrement(VariantId(0)).unwrap();
        assert_eq!(deck.remaining(VariantId(0)), 1);
        deck.decrement(VariantId(0)).unwrap();
        assert_eq!(deck.remaining(VariantId(0)), 0);
    }

    #[test]
    fn decrement_depleted_variant_fails_without_underflow() {
        let mut deck = Deck::new(&CountedCatalog::new(vec![1, 0]));
        assert_eq!(
            deck.decrement(VariantId(1)),
            Err(DeckError::Depleted {
                variant: VariantId(1)
            })
        );
        assert_eq!(deck.remaining(VariantId(1)), 0);
    }

    #[test]
    fn decrement_unknown_variant_fails() {
        let mut deck = Deck::new(&CountedCatalog::new(vec![1]));
        assert_eq!(
            deck.decrement(VariantId(9)),
            Err(DeckError::UnknownVariant {
                variant: VariantId(9)
            })
        );
    }

    #[test]
    fn remaining_unknown_variant_is_zero() {
        let deck = Deck::new(&CountedCatalog::new(vec![1]));
        assert_eq!(deck.remaining(VariantId(42)), 0);
    }

    #[test]
    fn reset_restores_initial_counts() {
        let mut deck = Deck::new(&CountedCatalog::new(vec![2, 3]));
        deck.decrement(VariantId(0)).unwrap();
        deck.decrement(VariantId(1)).unwrap();
        deck.reset();
        assert_eq!(deck.remaining(VariantId(0)), 2);
        assert_eq!(deck.remaining(VariantId(1)), 3);
    }

    #[test]
    fn counts_iterate_in_catalog_order() {
        let deck = Deck::new(&CountedCatalog::new(vec![4, 1, 2]));
        let counts: Vec<_> = deck.counts().collect();
        assert_eq!(
            counts,
            vec![
                (VariantId(0), 4),
                (VariantId(1), 1),
                (VariantId(2), 2),
            ]
        );
    }

    proptest! {
        /// Deck conservation: after n successful decrements of a variant,
        /// remaining == initial - n, and the total shrinks by the same n.
        #[test]
        fn conservation_under_decrements(initial in 0u32..20, takes in 0u32..25) {
            let mut deck = Deck::new(&CountedCatalog::new(vec![initial, 7]));
            let mut taken = 0u32;
            for _ in 0..takes {
                if deck.decrement(VariantId(0)).is_ok() {
                    taken += 1;
                }
            }
            prop_assert_eq!(taken, takes.min(initial));
            prop_assert_eq!(deck.remaining(VariantId(0)), initial - taken);
            prop_assert_eq!(
                deck.total_remaining(),
                u64::from(initial - taken) + 7
            );
        }

        /// Reset is idempotent: one reset and two resets agree.
        #[test]
        fn reset_idempotent(initial in 1u32..10, takes in 0u32..10) {
            let mut deck = Deck::new(&CountedCatalog::new(vec![initial]));
            for _ in 0..takes.min(initial) {
                deck.decrement(VariantId(0)).unwrap();
            }
            deck.reset();
            let once = deck.remaining(VariantId(0));
            deck.reset();
            prop_assert_eq!(once, deck.remaining(VariantId(0)));
            prop_assert_eq!(once, initial);
        }
    }
}
