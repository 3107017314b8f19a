//! Multi-source shortest-distance field over the 8-connected grid.
//!
//! Breadth-first from every cell carrying the source code at once.
//! Diagonal steps cost 1 (Chebyshev metric), and two diagonally adjacent
//! cells are one step apart even when both orthogonal cells between them
//! are walls. Walls block propagation but bees do not.

use beeclust_core::cell::{self, CellCode};
use beeclust_core::Grid;

use crate::grid_helpers::{neighbours, OFFSETS_8};
use crate::queue::{Job, JobQueue};

/// Which fixture a distance field is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatSource {
    /// Distance to the nearest heater.
    Heater,
    /// Distance to the nearest cooler.
    Cooler,
}

impl HeatSource {
    /// The packed cell code of this source.
    pub fn code(self) -> CellCode {
        match self {
            HeatSource::Heater => cell::HEATER,
            HeatSource::Cooler => cell::COOLER,
        }
    }
}

/// Compute the per-cell step count to the nearest `source` cell.
///
/// Returns a flat row-major buffer matching the grid shape. `-1` marks
/// cells no source reaches — including every wall cell, which keeps
/// distance `-1` even when a source is adjacent.
///
/// The queue is sized `rows * cols`: the `dist < 0 || dist > d + 1`
/// update guard together with FIFO pop order (distances pop in
/// non-decreasing order) means each cell is enqueued at most once.
pub fn distance_field(grid: &Grid, source: HeatSource) -> Vec<i32> {
    let rows = grid.rows();
    let cols = grid.cols();
    let n = grid.cell_count();
    let codes = grid.codes();
    let source_code = source.code();

    let mut dist = vec![-1i32; n];
    let mut queue = JobQueue::with_capacity(n);

    for row in 0..rows {
        for col in 0..cols {
            let i = grid.index(row, col);
            if codes[i] == source_code {
                dist[i] = 0;
                queue.put(Job { row, col, dist: 0 });
            }
        }
    }

    while let Some(job) = queue.get() {
        let next = job.dist + 1;
        for (nr, nc) in neighbours(job.row, job.col, rows, cols, &OFFSETS_8) {
            let ni = grid.index(nr, nc);
            if codes[ni] == cell::WALL {
                continue;
            }
            if dist[ni] < 0 || dist[ni] > next {
                dist[ni] = next;
                queue.put(Job {
                    row: nr,
                    col: nc,
                    dist: next,
                });
            }
        }
    }

    dist
}
