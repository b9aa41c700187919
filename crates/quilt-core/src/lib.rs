//! Core types and traits for the quilt wave-function-collapse engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared across the quilt workspace: the tile-variant
//! identifier, edge directions, the [`Catalog`] contract that concrete
//! tile sets implement, and the [`Deck`] supply counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod catalog;
mod deck;
mod direction;
mod error;
mod id;

pub use catalog::Catalog;
pub use deck::Deck;
pub use direction::Direction;
pub use error::DeckError;
pub use id::VariantId;
