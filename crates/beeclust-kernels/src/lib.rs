//! Compute kernels for the BeeClust swarm simulation.
//!
//! Three entry points, all single-threaded blocking computations over
//! borrowed storage:
//!
//! - [`recalculate_heat`] — steady-state temperatures from shortest-path
//!   distances to heaters and coolers.
//! - [`swarms`] — connected components of bee cells under 4-neighbourhood
//!   adjacency.
//! - [`tick`] — one discrete step of the per-bee state machine.
//!
//! Kernels treat their inputs as well-formed; shape mismatches are
//! programming errors and panic. Scratch buffers (BFS queue, distance
//! fields, done map) are allocated per call and freed on return.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod grid_helpers;

pub mod distance;
pub mod heatmap;
pub mod queue;
pub mod swarm;
pub mod tick;

pub use distance::{distance_field, HeatSource};
pub use heatmap::recalculate_heat;
pub use queue::{Job, JobQueue};
pub use swarm::swarms;
pub use tick::tick;
