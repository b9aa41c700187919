//! Cells: per-position variant domains with derived entropy.

use quilt_core::{Deck, VariantId};

/// One grid position: the set of variants still admissible there.
///
/// Domains only shrink — propagation removes unsupported variants and a
/// collapse forces the domain to a singleton. Entropy is derived from
/// the domain and the current deck counts on every query; it is never
/// cached, so it can never be stale.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) domain: Vec<VariantId>,
    pub(crate) collapsed: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, domain: Vec<VariantId>) -> Self {
        Self {
            row,
            col,
            domain,
            collapsed: false,
        }
    }

    /// Supply-weighted Shannon entropy of the remaining domain:
    /// `-Σ p(v) ln p(v)` with `p(v) = remaining(v) / Σ remaining`.
    ///
    /// Zero for collapsed or singleton domains. `NaN` for an empty
    /// domain, whose entropy is undefined — an empty domain means the
    /// board is in contradiction and selection never consults it.
    pub(crate) fn entropy(&self, deck: &Deck) -> f64 {
        if self.collapsed || self.domain.len() == 1 {
            return 0.0;
        }
        if self.domain.is_empty() {
            return f64::NAN;
        }
        let total: u64 = self
            .domain
            .iter()
            .map(|&v| u64::from(deck.remaining(v)))
            .sum();
        if total == 0 {
            return f64::NAN;
        }
        let total = total as f64;
        let mut entropy = 0.0;
        for &v in &self.domain {
            let n = deck.remaining(v);
            if n == 0 {
                continue;
            }
            let p = f64::from(n) / total;
            entropy -= p * p.ln();
        }
        entropy
    }

    pub(crate) fn view(&self, deck: &Deck) -> CellView {
        CellView {
            domain: self.domain.clone(),
            collapsed: self.collapsed,
            entropy: self.entropy(deck),
        }
    }
}

/// Read-only snapshot of one cell, for rendering and overlays.
///
/// Returned by [`Board::cell_at`](crate::Board::cell_at). Detached from
/// the board: holding a view does not block further stepping.
#[derive(Clone, Debug)]
pub struct CellView {
    /// Variants still admissible at this position, in catalog order.
    pub domain: Vec<VariantId>,
    /// Whether the cell has been collapsed to a single variant.
    pub collapsed: bool,
    /// Supply-weighted entropy at snapshot time; `0.0` when collapsed,
    /// `NaN` when the domain is empty (contradiction).
    pub entropy: f64,
}
