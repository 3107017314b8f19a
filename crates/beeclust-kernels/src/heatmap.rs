//! Heatmap kernel: steady-state temperature per cell.
//!
//! Combines heater and cooler distance fields. Source cells pin to their
//! own temperature, walls hold NaN, and everything else gets the ambient
//! temperature plus the clamped reciprocal-distance contributions.

use beeclust_core::{cell, Grid, HeatParams, Heatmap};

use crate::distance::{distance_field, HeatSource};

/// Recompute `heatmap` in place from the grid's fixtures.
///
/// For a cell at heater distance `d_h` and cooler distance `d_c`:
///
/// ```text
/// heating = (t_heater − t_env) / d_h      (0 when unreachable)
/// cooling = (t_env − t_cooler) / d_c      (0 when unreachable)
/// temp    = t_env + k_temp · (max(0, heating) − max(0, cooling))
/// ```
///
/// so a cell neither source reaches settles at `t_env`, and negative
/// contributions (an inverted parameterisation) are discarded by the
/// clamp rather than flipping sign.
///
/// # Panics
///
/// Panics if the heatmap shape differs from the grid shape.
pub fn recalculate_heat(heatmap: &mut Heatmap, grid: &Grid, params: &HeatParams) {
    assert_eq!(
        (heatmap.rows(), heatmap.cols()),
        (grid.rows(), grid.cols()),
        "heatmap shape must match grid shape"
    );

    let dist_heat = distance_field(grid, HeatSource::Heater);
    let dist_cool = distance_field(grid, HeatSource::Cooler);
    let codes = grid.codes();
    let temps = heatmap.temps_mut();

    for i in 0..codes.len() {
        temps[i] = if codes[i] == cell::WALL {
            f64::NAN
        } else if dist_heat[i] == 0 {
            params.t_heater
        } else if dist_cool[i] == 0 {
            params.t_cooler
        } else {
            let heating = if dist_heat[i] > 0 {
                (params.t_heater - params.t_env) / f64::from(dist_heat[i])
            } else {
                0.0
            };
            let cooling = if dist_cool[i] > 0 {
                (params.t_env - params.t_cooler) / f64::from(dist_cool[i])
            } else {
                0.0
            };
            params.t_env + params.k_temp * (heating.max(0.0) - cooling.max(0.0))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_test_utils::parse_grid;

    fn params() -> HeatParams {
        HeatParams {
            t_heater: 35.0,
            t_cooler: 5.0,
            t_env: 20.0,
            k_temp: 0.9,
        }
    }

    fn recalc(grid: &Grid, params: &HeatParams) -> Heatmap {
        let mut hm = Heatmap::for_grid(grid);
        recalculate_heat(&mut hm, grid, params);
        hm
    }

    #[test]
    fn corridor_between_heater_and_cooler() {
        // Heater distance [0,1,2,3,4], cooler distance [4,3,2,1,0]:
        //   (0,1): 20 + 0.9·(15/1 − 15/3) = 29
        //   (0,2): 20 + 0.9·(15/2 − 15/2) = 20
        //   (0,3): 20 + 0.9·(15/3 − 15/1) = 11
        let grid = parse_grid("H...C");
        let hm = recalc(&grid, &params());
        let expected = [35.0, 29.0, 20.0, 11.0, 5.0];
        for (i, want) in expected.iter().enumerate() {
            assert!(
                (hm.temps()[i] - want).abs() < 1e-9,
                "cell {i}: got {}, want {want}",
                hm.temps()[i]
            );
        }
    }

    #[test]
    fn walls_are_nan_and_nothing_else() {
        let grid = parse_grid(
            "H#.\n\
             .#C",
        );
        let hm = recalc(&grid, &params());
        for r in 0..2u32 {
            for c in 0..3u32 {
                let is_wall = grid.cell(r, c) == beeclust_core::Cell::Wall;
                assert_eq!(hm.get(r, c).is_nan(), is_wall, "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn sources_pin_their_own_temperature() {
        let grid = parse_grid("H.C");
        let hm = recalc(&grid, &params());
        assert_eq!(hm.get(0, 0), 35.0);
        assert_eq!(hm.get(0, 2), 5.0);
    }

    #[test]
    fn heater_adjacent_to_cooler_pins_heater_first() {
        // A cell that is both a heater (d=0) and at cooler distance 1
        // resolves as heater; the heater branch is checked first.
        let grid = parse_grid("HC");
        let hm = recalc(&grid, &params());
        assert_eq!(hm.get(0, 0), 35.0);
        assert_eq!(hm.get(0, 1), 5.0);
    }

    #[test]
    fn unreachable_cells_settle_at_ambient() {
        let grid = parse_grid(
            "H#.\n\
             ##.",
        );
        let hm = recalc(&grid, &params());
        assert_eq!(hm.get(0, 2), 20.0);
        assert_eq!(hm.get(1, 2), 20.0);
    }

    #[test]
    fn no_sources_all_ambient() {
        let grid = parse_grid("...\n...");
        let hm = recalc(&grid, &params());
        assert!(hm.temps().iter().all(|&t| t == 20.0));
    }

    #[test]
    fn all_walls_all_nan() {
        let grid = parse_grid("###\n###");
        let hm = recalc(&grid, &params());
        assert!(hm.temps().iter().all(|t| t.is_nan()));
    }

    #[test]
    fn heater_only_falls_off_with_chebyshev_distance() {
        let grid = parse_grid("H....");
        let hm = recalc(&grid, &params());
        for d in 1..5usize {
            let want = 20.0 + 0.9 * 15.0 / d as f64;
            assert!((hm.temps()[d] - want).abs() < 1e-9);
        }
    }

    #[test]
    fn recalculation_is_idempotent() {
        let grid = parse_grid(
            "H..#C\n\
             ..#..\n\
             ^.v..",
        );
        let a = recalc(&grid, &params());
        let b = recalc(&grid, &params());
        for (x, y) in a.temps().iter().zip(b.temps()) {
            assert!(x == y || (x.is_nan() && y.is_nan()));
        }
    }

    #[test]
    fn inverted_parameterisation_clamps_to_ambient() {
        // Heater colder than ambient: its contribution is negative and
        // the clamp discards it entirely.
        let grid = parse_grid("H..");
        let cold_heater = HeatParams {
            t_heater: 10.0,
            t_cooler: 5.0,
            t_env: 20.0,
            k_temp: 0.9,
        };
        let hm = recalc(&grid, &cold_heater);
        assert_eq!(hm.get(0, 1), 20.0);
        assert_eq!(hm.get(0, 2), 20.0);
    }
}
