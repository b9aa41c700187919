//! quilt: an incremental wave-function-collapse tile map solver.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the quilt sub-crates. For most users, adding `quilt` as a single
//! dependency is sufficient.
//!
//! A board holds a grid of cells, each a superposition of tile
//! variants. Every [`Board::step`](board::Board::step) collapses one
//! cell — chosen by a deterministic minimum-entropy policy or an
//! entropy-weighted random one — consumes a copy from the tile deck,
//! and propagates edge constraints until the grid settles, resolves, or
//! contradicts. The driving loop, rendering, and the concrete tile
//! catalog all live outside this workspace; the solver only consumes
//! the [`Catalog`](core::Catalog) contract.
//!
//! # Quick start
//!
//! ```rust
//! use quilt::prelude::*;
//!
//! // A two-variant catalog: each variant tolerates only itself, with
//! // plenty of supply.
//! struct Uniform {
//!     ids: Vec<VariantId>,
//! }
//!
//! impl Catalog for Uniform {
//!     fn variants(&self) -> &[VariantId] { &self.ids }
//!     fn initial_supply(&self, _: VariantId) -> u32 { 64 }
//!     fn compatible(&self, a: VariantId, b: VariantId, _: Direction) -> bool {
//!         a == b
//!     }
//! }
//!
//! let catalog = Uniform { ids: vec![VariantId(0), VariantId(1)] };
//! let mut board = Board::with_seed(
//!     4,
//!     4,
//!     Box::new(catalog),
//!     SelectionPolicy::MinEntropy,
//!     42,
//! )
//! .unwrap();
//!
//! // Drive the solve one collapse at a time.
//! loop {
//!     match board.step().unwrap() {
//!         StepOutcome::Progressed(report) => {
//!             assert!(report.visited >= 1);
//!         }
//!         StepOutcome::Resolved => break,
//!         StepOutcome::Contradiction => {
//!             board.reset();
//!         }
//!     }
//! }
//! assert_eq!(board.state(), BoardState::Resolved);
//! // A self-matching catalog floods the grid with a single variant.
//! let first = board.cell_at(0, 0).unwrap().domain[0];
//! assert_eq!(board.cell_at(3, 3).unwrap().domain, vec![first]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, directions, the catalog contract, and the deck
/// (`quilt-core`).
pub use quilt_core as core;

/// The solver: board, cells, policies, propagation (`quilt-board`).
pub use quilt_board as board;

/// The types most drivers need, in one import.
pub mod prelude {
    pub use quilt_board::{
        Board, BoardError, BoardState, CellView, SelectionPolicy, StepError, StepOutcome,
        StepReport,
    };
    pub use quilt_core::{Catalog, Deck, DeckError, Direction, VariantId};
}
