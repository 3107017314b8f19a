//! Swarm kernel: connected components of bee cells.
//!
//! A swarm is a maximal set of bee cells (active or waiting) connected
//! under 4-neighbourhood adjacency. The scan is row-major; members of
//! each swarm are listed in BFS discovery order seeded at the scan
//! position, so the output is a deterministic function of the grid.

use beeclust_core::{cell, Grid, Pos};

use crate::grid_helpers::{neighbours, OFFSETS_4};
use crate::queue::{Job, JobQueue};

/// Partition all bee cells into swarms.
///
/// Every bee cell appears in exactly one inner list; non-bee cells never
/// appear. An empty grid (no bees) yields an empty outer list.
pub fn swarms(grid: &Grid) -> Vec<Vec<Pos>> {
    let rows = grid.rows();
    let cols = grid.cols();
    let codes = grid.codes();

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = JobQueue::with_capacity(grid.cell_count());
    let mut result = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let i = grid.index(row, col);
            if visited[i] || !cell::is_bee_code(codes[i]) {
                continue;
            }

            visited[i] = true;
            queue.reset();
            queue.put(Job { row, col, dist: 0 });
            let mut members = Vec::new();

            while let Some(job) = queue.get() {
                members.push(job.pos());
                for (nr, nc) in neighbours(job.row, job.col, rows, cols, &OFFSETS_4) {
                    let ni = grid.index(nr, nc);
                    if !visited[ni] && cell::is_bee_code(codes[ni]) {
                        visited[ni] = true;
                        queue.put(Job {
                            row: nr,
                            col: nc,
                            dist: 0,
                        });
                    }
                }
            }

            result.push(members);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_test_utils::parse_grid;

    fn pos(row: u32, col: u32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn walls_split_swarms() {
        // The wall is not a bee and (1,1) is not 4-adjacent to either bee.
        let grid = parse_grid(
            "^#^\n\
             .^.",
        );
        assert_eq!(
            swarms(&grid),
            vec![vec![pos(0, 0)], vec![pos(0, 2)], vec![pos(1, 1)]]
        );
    }

    #[test]
    fn single_bee_single_swarm() {
        let grid = parse_grid("^");
        assert_eq!(swarms(&grid), vec![vec![pos(0, 0)]]);
    }

    #[test]
    fn no_bees_no_swarms() {
        assert!(swarms(&parse_grid("...")).is_empty());
        assert!(swarms(&parse_grid("###")).is_empty());
        assert!(swarms(&parse_grid("H.C")).is_empty());
    }

    #[test]
    fn waiting_bees_join_swarms() {
        let mut grid = parse_grid(">>.");
        grid.set(0, 1, beeclust_core::Cell::Waiting { ticks_remaining: 4 });
        assert_eq!(swarms(&grid), vec![vec![pos(0, 0), pos(0, 1)]]);
    }

    #[test]
    fn diagonal_bees_are_separate() {
        let grid = parse_grid(
            "^.\n\
             .^",
        );
        assert_eq!(swarms(&grid), vec![vec![pos(0, 0)], vec![pos(1, 1)]]);
    }

    #[test]
    fn bfs_discovery_order_from_scan_seed() {
        // Seeded at (0,0); from (0,1) the queue visits the south
        // neighbour (1,1) before the east neighbour (0,2).
        let grid = parse_grid(
            "^^^\n\
             .^.",
        );
        assert_eq!(
            swarms(&grid),
            vec![vec![pos(0, 0), pos(0, 1), pos(1, 1), pos(0, 2)]]
        );
    }

    #[test]
    fn l_shaped_swarm_is_one_component() {
        let grid = parse_grid(
            "^..\n\
             ^..\n\
             ^^^",
        );
        let result = swarms(&grid);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 5);
    }

    #[test]
    fn heater_and_cooler_are_not_bees() {
        let grid = parse_grid("^H^C^");
        assert_eq!(swarms(&grid).len(), 3);
    }
}
