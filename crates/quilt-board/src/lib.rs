//! The quilt solving engine: cells, selection policies, constraint
//! propagation, and the [`Board`] state machine.
//!
//! A board holds a grid of cells, each carrying a domain of tile
//! variants still admissible at that position. [`Board::step`] collapses
//! one cell to a single variant (consuming deck supply) and propagates
//! the resulting edge constraints until the grid reaches a fixed point,
//! a full solution ([`BoardState::Resolved`]), or an empty domain
//! ([`BoardState::Contradiction`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod policy;
mod propagate;
mod report;

pub use board::Board;
pub use cell::CellView;
pub use error::{BoardError, StepError};
pub use policy::SelectionPolicy;
pub use report::{BoardState, StepOutcome, StepReport};
