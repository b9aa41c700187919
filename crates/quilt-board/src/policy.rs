//! Cell selection policies: deterministic minimum-entropy and
//! entropy-weighted random.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use quilt_core::Deck;

use crate::cell::Cell;

/// How [`Board::step`](crate::Board::step) picks the next cell to
/// collapse.
///
/// Policies can be swapped between steps with
/// [`Board::set_policy`](crate::Board::set_policy) without resetting
/// the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionPolicy {
    /// Pick the uncollapsed cell with the smallest entropy; ties break
    /// to the lowest row, then the lowest column, so replays are
    /// reproducible.
    MinEntropy,
    /// Draw an uncollapsed cell with probability proportional to
    /// `exp(-entropy * k)`.
    ///
    /// `k > 0` favors low-entropy cells (minimum-entropy-like),
    /// `k < 0` favors high-entropy cells, and `k = 0` is uniform over
    /// uncollapsed cells. The draw uses the board's seeded RNG.
    WeightedRandom {
        /// Sharpness of the entropy bias.
        k: f64,
    },
}

/// Pick the index of the next cell to collapse, or `None` iff every
/// cell is collapsed.
pub(crate) fn select_cell(
    policy: SelectionPolicy,
    cells: &[Cell],
    deck: &Deck,
    rng: &mut ChaCha8Rng,
) -> Option<usize> {
    match policy {
        SelectionPolicy::MinEntropy => select_min_entropy(cells, deck),
        SelectionPolicy::WeightedRandom { k } => select_weighted(cells, deck, k, rng),
    }
}

fn select_min_entropy(cells: &[Cell], deck: &Deck) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, cell) in cells.iter().enumerate() {
        if cell.collapsed {
            continue;
        }
        let entropy = cell.entropy(deck);
        match best {
            // Strict `<` keeps the earliest row-major cell on ties.
            Some((_, lowest)) if entropy >= lowest => {}
            _ => best = Some((idx, entropy)),
        }
    }
    best.map(|(idx, _)| idx)
}

fn select_weighted(cells: &[Cell], deck: &Deck, k: f64, rng: &mut ChaCha8Rng) -> Option<usize> {
    // Collect (index, exponent) for the uncollapsed cells. The weights
    // exp(-e * k) are computed shifted by the largest exponent; the
    // shift cancels out of the draw. The product -e * k can itself
    // saturate to ±inf for extreme k, which would turn the shifted
    // weights into NaN, so exponents are clamped to the finite range
    // first. Saturated exponents collapse onto f64::MIN or f64::MAX
    // and tie there, which is the right limit behavior.
    let mut candidates: Vec<(usize, f64)> = Vec::new();
    let mut max_exponent = f64::NEG_INFINITY;
    for (idx, cell) in cells.iter().enumerate() {
        if cell.collapsed {
            continue;
        }
        let exponent = -cell.entropy(deck) * k;
        let exponent = if exponent.is_nan() {
            // Only reachable as 0 * inf (zero entropy, infinite k);
            // treat it as the limit of -e * k with e at zero.
            0.0
        } else {
            exponent.clamp(f64::MIN, f64::MAX)
        };
        if exponent > max_exponent {
            max_exponent = exponent;
        }
        candidates.push((idx, exponent));
    }
    if candidates.is_empty() {
        return None;
    }

    let weights: Vec<f64> = candidates
        .iter()
        .map(|&(_, exponent)| (exponent - max_exponent).exp())
        .collect();
    let total: f64 = weights.iter().sum();

    // Cumulative-weight draw in row-major candidate order.
    let mut target = rng.random_range(0.0..total);
    for (&(idx, _), &weight) in candidates.iter().zip(&weights) {
        if target < weight {
            return Some(idx);
        }
        target -= weight;
    }
    // Rounding in the final subtraction can leave a sliver; the last
    // candidate takes it.
    candidates.last().map(|&(idx, _)| idx)
}
