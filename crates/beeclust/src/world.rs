//! The `World` façade: owns the grid, heatmap, parameters, and RNG, and
//! exposes the three kernel entry points.

use std::error::Error;
use std::fmt;

use beeclust_core::{
    Grid, GridError, HeatParams, Heatmap, ParamError, Pos, SeededRng, TickParams,
};
use beeclust_kernels::{recalculate_heat, swarms, tick};

/// Errors from [`World`] construction.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldError {
    /// Grid or heatmap construction failed.
    Grid(GridError),
    /// A simulation parameter is out of range.
    Param(ParamError),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::Param(e) => write!(f, "parameter error: {e}"),
        }
    }
}

impl Error for WorldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Param(e) => Some(e),
        }
    }
}

impl From<GridError> for WorldError {
    fn from(e: GridError) -> WorldError {
        WorldError::Grid(e)
    }
}

impl From<ParamError> for WorldError {
    fn from(e: ParamError) -> WorldError {
        WorldError::Param(e)
    }
}

/// A complete simulation: arena, heatmap, parameters, and the RNG the
/// tick kernel draws from.
///
/// The constructor is the validation boundary — parameters are checked
/// once here, and the kernels trust them afterwards. The heatmap is
/// computed at construction and again on demand via
/// [`recalculate_heat`](World::recalculate_heat) after fixture edits.
#[derive(Debug)]
pub struct World {
    grid: Grid,
    heatmap: Heatmap,
    heat_params: HeatParams,
    tick_params: TickParams,
    rng: SeededRng,
}

impl World {
    /// Build a world around an existing grid, seeding the RNG from the
    /// wall clock.
    ///
    /// # Errors
    ///
    /// Returns `Err(WorldError::Param)` if either parameter set fails
    /// validation.
    pub fn new(
        grid: Grid,
        heat_params: HeatParams,
        tick_params: TickParams,
    ) -> Result<World, WorldError> {
        Self::build(grid, heat_params, tick_params, SeededRng::from_clock())
    }

    /// [`World::new`] with an explicit RNG seed, for reproducible runs.
    pub fn with_seed(
        grid: Grid,
        heat_params: HeatParams,
        tick_params: TickParams,
        seed: u64,
    ) -> Result<World, WorldError> {
        Self::build(grid, heat_params, tick_params, SeededRng::from_seed(seed))
    }

    fn build(
        grid: Grid,
        heat_params: HeatParams,
        tick_params: TickParams,
        rng: SeededRng,
    ) -> Result<World, WorldError> {
        heat_params.validate()?;
        tick_params.validate()?;
        let mut heatmap = Heatmap::for_grid(&grid);
        recalculate_heat(&mut heatmap, &grid, &heat_params);
        Ok(World {
            grid,
            heatmap,
            heat_params,
            tick_params,
            rng,
        })
    }

    /// Recompute the heatmap from the current grid. Call after editing
    /// fixtures through [`grid_mut`](World::grid_mut).
    pub fn recalculate_heat(&mut self) -> &Heatmap {
        recalculate_heat(&mut self.heatmap, &self.grid, &self.heat_params);
        &self.heatmap
    }

    /// Partition the bee cells into swarms.
    pub fn swarms(&self) -> Vec<Vec<Pos>> {
        swarms(&self.grid)
    }

    /// Advance the simulation by one tick. Returns the number of bees
    /// that moved.
    pub fn tick(&mut self) -> usize {
        tick(&mut self.grid, &self.heatmap, &self.tick_params, &mut self.rng)
    }

    /// The arena.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable arena access. The heatmap is not tracked: after moving
    /// walls, heaters, or coolers, call
    /// [`recalculate_heat`](World::recalculate_heat).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The current heatmap.
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// The heat parameters this world was built with.
    pub fn heat_params(&self) -> &HeatParams {
        &self.heat_params
    }

    /// The tick parameters this world was built with.
    pub fn tick_params(&self) -> &TickParams {
        &self.tick_params
    }

    /// Number of bee cells (active or waiting).
    pub fn bee_count(&self) -> usize {
        self.grid.bee_count()
    }
}
