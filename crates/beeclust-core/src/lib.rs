//! Core types for the BeeClust swarm simulation.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! packed cell-code representation, the `Cell`/`Direction` sum types used
//! at the façade boundary, grid and heatmap storage, simulation
//! parameters, the RNG abstraction, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod params;
pub mod rng;

// Re-export core types at crate root for convenience.
pub use cell::{Cell, CellCode, Direction};
pub use error::{GridError, ParamError};
pub use grid::{Grid, Heatmap, Pos};
pub use params::{HeatParams, TickParams};
pub use rng::{RandomSource, SeededRng};
