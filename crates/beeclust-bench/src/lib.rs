//! Benchmark fixtures for the BeeClust kernels.
//!
//! [`arena`] builds a deterministic pseudo-random grid: sparse walls, a
//! scattering of bees, and heat sources in the corners and centre, so
//! every kernel has representative work on a large grid.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use beeclust_core::cell::{self, CellCode};
use beeclust_core::{Grid, RandomSource, SeededRng};

/// Build a `rows × cols` arena from a seed: roughly 5% walls, 10% bees,
/// heaters in the corners, and a cooler at the centre.
pub fn arena(rows: u32, cols: u32, seed: u64) -> Grid {
    let mut rng = SeededRng::from_seed(seed);
    let n = rows as usize * cols as usize;

    let mut codes: Vec<CellCode> = (0..n)
        .map(|_| match rng.next_below(100) {
            0..=4 => cell::WALL,
            5..=14 => 1 + rng.next_below(4) as CellCode,
            _ => cell::EMPTY,
        })
        .collect();

    let idx = |r: u32, c: u32| r as usize * cols as usize + c as usize;
    for (r, c) in [(0, 0), (0, cols - 1), (rows - 1, 0), (rows - 1, cols - 1)] {
        codes[idx(r, c)] = cell::HEATER;
    }
    codes[idx(rows / 2, cols / 2)] = cell::COOLER;

    Grid::from_codes(rows, cols, codes).expect("fixture codes are legal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_is_deterministic() {
        assert_eq!(arena(20, 20, 7), arena(20, 20, 7));
    }

    #[test]
    fn arena_has_sources_and_bees() {
        let grid = arena(50, 50, 1);
        assert_eq!(grid.code(0, 0), cell::HEATER);
        assert_eq!(grid.code(25, 25), cell::COOLER);
        assert!(grid.bee_count() > 0);
    }
}
