//! BeeClust: a swarm simulation on a 2D grid.
//!
//! Bees move in cardinal directions, bounce off walls, and cluster
//! where the temperature suits them — the BeeClust aggregation
//! behaviour. Three kernels do the work: heatmap computation from
//! heater/cooler shortest-path distances, swarm detection via connected
//! components, and the per-tick bee state machine.
//!
//! # Quick start
//!
//! ```rust
//! use beeclust::prelude::*;
//!
//! // A 3×5 arena: heater on the left, cooler on the right, two bees.
//! let grid = Grid::from_codes(
//!     3,
//!     5,
//!     vec![
//!         6, 0, 0, 0, 7, //
//!         0, 2, 0, 0, 0, //
//!         0, 0, 0, 4, 0,
//!     ],
//! )
//! .unwrap();
//!
//! let mut world = World::with_seed(
//!     grid,
//!     HeatParams::default(),
//!     TickParams::default(),
//!     42,
//! )
//! .unwrap();
//!
//! // Heater cells pin to their own temperature.
//! assert_eq!(world.heatmap().get(0, 0), HeatParams::default().t_heater);
//!
//! // Run the simulation; bees are conserved.
//! for _ in 0..10 {
//!     world.tick();
//! }
//! assert_eq!(world.bee_count(), 2);
//! let swarms = world.swarms();
//! assert!(!swarms.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `beeclust-core` | Cell codes, grid and heatmap storage, parameters, RNG |
//! | [`kernels`] | `beeclust-kernels` | Distance field, heatmap, swarm, and tick kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod world;

/// Core types: cell codes, storage, parameters, RNG (`beeclust-core`).
pub use beeclust_core as types;

/// The compute kernels (`beeclust-kernels`).
///
/// Usually reached through [`World`]; exposed directly for callers that
/// manage their own storage.
pub use beeclust_kernels as kernels;

pub use world::{World, WorldError};

/// Common imports for typical usage.
///
/// ```rust
/// use beeclust::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{World, WorldError};
    pub use beeclust_core::{
        Cell, Direction, Grid, GridError, HeatParams, Heatmap, ParamError, Pos, RandomSource,
        SeededRng, TickParams,
    };
    pub use beeclust_kernels::{recalculate_heat, swarms, tick};
}
