//! The [`Board`]: grid, deck, policy, and the step state machine.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quilt_core::{Catalog, Deck, VariantId};

use crate::cell::{Cell, CellView};
use crate::error::{BoardError, StepError};
use crate::policy::{self, SelectionPolicy};
use crate::propagate::propagate;
use crate::report::{BoardState, StepOutcome, StepReport};

/// A width × height grid of cells being solved by wave function
/// collapse.
///
/// The board exclusively owns its cells and deck and holds the catalog
/// behind a `Box<dyn Catalog>`. [`step`](Board::step) is the only
/// mutating entry point during a solve and runs each collapse plus its
/// full propagation fixed point to completion before returning; callers
/// serialize access (one step per driver tick).
///
/// Terminal states are ordinary return values: a driver loops on
/// `step()`, branches on [`StepOutcome`], and answers
/// [`StepOutcome::Contradiction`] with [`reset`](Board::reset) if it
/// wants to try again. The engine itself never backtracks.
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    catalog: Box<dyn Catalog>,
    deck: Deck,
    policy: SelectionPolicy,
    rng: ChaCha8Rng,
    state: BoardState,
    contradiction: Option<(usize, usize)>,
    steps: u64,
}

impl Board {
    /// Build a board with every cell holding the full domain of
    /// supplied variants. Equivalent to [`Board::with_seed`] with seed
    /// 0.
    ///
    /// # Errors
    ///
    /// [`BoardError::EmptyCatalog`] if the catalog declares no
    /// variants, [`BoardError::NoSupply`] if it declares zero total
    /// supply.
    pub fn new(
        width: usize,
        height: usize,
        catalog: Box<dyn Catalog>,
        policy: SelectionPolicy,
    ) -> Result<Self, BoardError> {
        Self::with_seed(width, height, catalog, policy, 0)
    }

    /// Build a board whose randomized draws (weighted-random cell
    /// selection and variant choice) come from a ChaCha8 stream seeded
    /// with `seed`. Identical seeds replay identical solves.
    pub fn with_seed(
        width: usize,
        height: usize,
        catalog: Box<dyn Catalog>,
        policy: SelectionPolicy,
        seed: u64,
    ) -> Result<Self, BoardError> {
        if catalog.variants().is_empty() {
            return Err(BoardError::EmptyCatalog);
        }
        let deck = Deck::new(&*catalog);
        if deck.total_remaining() == 0 {
            return Err(BoardError::NoSupply);
        }

        let full = supplied_variants(&*catalog, &deck);
        let cells: Vec<Cell> = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| Cell::new(row, col, full.clone()))
            .collect();
        // A zero-cell grid is degenerate but legal: it is born resolved.
        let state = if cells.is_empty() {
            BoardState::Resolved
        } else {
            BoardState::Running
        };

        Ok(Self {
            width,
            height,
            cells,
            catalog,
            deck,
            policy,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state,
            contradiction: None,
            steps: 0,
        })
    }

    /// `(width, height)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Current solver state.
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Position of the cell whose domain emptied, while in
    /// [`BoardState::Contradiction`].
    pub fn contradiction_at(&self) -> Option<(usize, usize)> {
        self.contradiction
    }

    /// Number of collapses performed since construction or the last
    /// [`reset`](Board::reset).
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// The deck of remaining supply counts.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Read-only snapshot of the cell at `(row, col)`, or `None`
    /// outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellView> {
        self.index_of(row, col)
            .map(|idx| self.cells[idx].view(&self.deck))
    }

    /// Swap the selection policy without disturbing board state.
    ///
    /// Takes effect on the next [`step`](Board::step).
    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.policy = policy;
    }

    /// Collapse one cell chosen by the active policy and propagate the
    /// resulting constraints.
    ///
    /// On a board already in a terminal state this returns that
    /// terminal outcome and mutates nothing. The step that collapses
    /// the final cell reports [`StepOutcome::Resolved`].
    ///
    /// # Errors
    ///
    /// [`StepError::Depleted`] if the chosen variant turns out to have
    /// no remaining supply — an internal invariant violation, since
    /// propagation keeps depleted variants out of every domain. The
    /// step aborts without touching the deck or the grid.
    pub fn step(&mut self) -> Result<StepOutcome, StepError> {
        match self.state {
            BoardState::Resolved => return Ok(StepOutcome::Resolved),
            BoardState::Contradiction => return Ok(StepOutcome::Contradiction),
            BoardState::Running => {}
        }

        let Some(idx) = policy::select_cell(self.policy, &self.cells, &self.deck, &mut self.rng)
        else {
            self.state = BoardState::Resolved;
            return Ok(StepOutcome::Resolved);
        };
        let variant = self.choose_variant(idx)?;
        self.collapse(idx, variant)
    }

    /// Collapse a specific cell to a specific variant, then propagate.
    ///
    /// This is how a driver seeds a solve from a chosen starting tile.
    /// Terminal states short-circuit exactly like [`step`](Board::step).
    ///
    /// # Errors
    ///
    /// [`StepError::OutOfBounds`] for positions outside the grid,
    /// [`StepError::AlreadyCollapsed`] if the cell is settled,
    /// [`StepError::NotInDomain`] if the cell's domain no longer admits
    /// `variant`, and [`StepError::Depleted`] as for `step`.
    pub fn collapse_at(
        &mut self,
        row: usize,
        col: usize,
        variant: VariantId,
    ) -> Result<StepOutcome, StepError> {
        let idx = self
            .index_of(row, col)
            .ok_or(StepError::OutOfBounds { row, col })?;
        match self.state {
            BoardState::Resolved => return Ok(StepOutcome::Resolved),
            BoardState::Contradiction => return Ok(StepOutcome::Contradiction),
            BoardState::Running => {}
        }
        let cell = &self.cells[idx];
        if cell.collapsed {
            return Err(StepError::AlreadyCollapsed { row, col });
        }
        if !cell.domain.contains(&variant) {
            return Err(StepError::NotInDomain { variant, row, col });
        }
        self.collapse(idx, variant)
    }

    /// Restore every cell to its full domain, restore the deck, and
    /// return to [`BoardState::Running`] (or `Resolved` for a zero-cell
    /// grid). Valid from any state and idempotent.
    ///
    /// The RNG stream is left where it is; construct a new board with
    /// the same seed for a bit-identical replay.
    pub fn reset(&mut self) {
        self.deck.reset();
        let full = supplied_variants(&*self.catalog, &self.deck);
        for cell in &mut self.cells {
            cell.domain = full.clone();
            cell.collapsed = false;
        }
        self.contradiction = None;
        self.steps = 0;
        self.state = if self.cells.is_empty() {
            BoardState::Resolved
        } else {
            BoardState::Running
        };
    }

    /// Row-major index of `(row, col)`, or `None` outside the grid.
    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Draw one variant from the cell's domain, weighted by the current
    /// deck counts.
    fn choose_variant(&mut self, idx: usize) -> Result<VariantId, StepError> {
        let cell = &self.cells[idx];
        let total: u64 = cell
            .domain
            .iter()
            .map(|&v| u64::from(self.deck.remaining(v)))
            .sum();
        if total == 0 {
            // Every domain member is depleted: propagation failed to
            // exclude them. Report the first as the offender.
            return Err(StepError::Depleted {
                variant: cell.domain[0],
                row: cell.row,
                col: cell.col,
            });
        }
        let mut target = self.rng.random_range(0..total);
        for &v in &cell.domain {
            let weight = u64::from(self.deck.remaining(v));
            if target < weight {
                return Ok(v);
            }
            target -= weight;
        }
        // Unreachable: target starts strictly below the summed weights,
        // so the walk returns within the loop.
        Ok(cell.domain[cell.domain.len() - 1])
    }

    /// Force cell `idx` to `variant`, consume supply, sweep the variant
    /// out of other domains if it just depleted, and propagate.
    fn collapse(&mut self, idx: usize, variant: VariantId) -> Result<StepOutcome, StepError> {
        let (row, col) = (self.cells[idx].row, self.cells[idx].col);
        self.deck.decrement(variant).map_err(|_| {
            // The step aborts here with the deck and grid untouched.
            StepError::Depleted { variant, row, col }
        })?;

        let mut reductions = (self.cells[idx].domain.len() - 1) as u64;
        self.cells[idx].domain.clear();
        self.cells[idx].domain.push(variant);
        self.cells[idx].collapsed = true;
        self.steps += 1;

        let mut seeds = vec![idx];
        let mut emptied = None;
        if self.deck.remaining(variant) == 0 {
            // The supply just ran out: the variant must leave every
            // uncollapsed domain, and each shrunk cell re-seeds
            // propagation.
            for (i, cell) in self.cells.iter_mut().enumerate() {
                if cell.collapsed {
                    continue;
                }
                let before = cell.domain.len();
                cell.domain.retain(|&v| v != variant);
                if cell.domain.len() < before {
                    reductions += (before - cell.domain.len()) as u64;
                    seeds.push(i);
                    if cell.domain.is_empty() && emptied.is_none() {
                        emptied = Some((cell.row, cell.col));
                    }
                }
            }
        }

        if let Some(position) = emptied {
            self.state = BoardState::Contradiction;
            self.contradiction = Some(position);
            return Ok(StepOutcome::Contradiction);
        }

        let outcome = propagate(&mut self.cells, self.width, self.height, &*self.catalog, seeds);
        reductions += outcome.reductions;

        if let Some(position) = outcome.emptied {
            self.state = BoardState::Contradiction;
            self.contradiction = Some(position);
            return Ok(StepOutcome::Contradiction);
        }
        if self.cells.iter().all(|cell| cell.collapsed) {
            self.state = BoardState::Resolved;
            return Ok(StepOutcome::Resolved);
        }
        Ok(StepOutcome::Progressed(StepReport {
            row,
            col,
            variant,
            reductions,
            visited: outcome.visited,
        }))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("steps", &self.steps)
            .field("deck_remaining", &self.deck.total_remaining())
            .finish()
    }
}

/// The variants a fresh domain holds: catalog order, zero-supply
/// variants excluded.
fn supplied_variants(catalog: &dyn Catalog, deck: &Deck) -> Vec<VariantId> {
    catalog
        .variants()
        .iter()
        .copied()
        .filter(|&v| deck.remaining(v) > 0)
        .collect()
}
