//! Tick kernel: one discrete step of the per-bee state machine.
//!
//! A single in-place row-major sweep. A parallel `done` map pins each
//! bee to exactly one causal update per tick: a bee that moves south or
//! east lands in a cell the sweep has not reached yet, and the done mark
//! on the target keeps it from being processed twice. The done map is
//! part of the algorithm's semantics, not a cache.

use beeclust_core::cell::{self, CellCode};
use beeclust_core::{Direction, Grid, Heatmap, RandomSource, TickParams};

/// Advance the simulation by one tick. Returns the number of bees that
/// moved into an empty cell.
///
/// Per active bee, in order: an optional heading re-draw (probability
/// `p_changedir`), then the step ahead is classified as a move, a bee
/// meeting, or a wall hit (arena edge, wall, heater, or cooler all
/// count). Wall hits and meetings may convert the bee to waiting; a wall
/// hit that does not turns the bee around 180°. Waiting bees count up
/// toward −1; a bee at −1 wakes with a uniform random heading.
///
/// The heading re-draw picks `x` uniformly from `{N, E, S}` and maps
/// `x == current` to `W`. The draw is deliberately skewed for bees
/// already facing west; the classic BeeClust controller behaves this
/// way and downstream statistics depend on it.
///
/// # Panics
///
/// Panics if the heatmap shape differs from the grid shape.
pub fn tick(
    grid: &mut Grid,
    heatmap: &Heatmap,
    params: &TickParams,
    rng: &mut impl RandomSource,
) -> usize {
    assert_eq!(
        (heatmap.rows(), heatmap.cols()),
        (grid.rows(), grid.cols()),
        "heatmap shape must match grid shape"
    );

    let rows = grid.rows();
    let cols = grid.cols();
    let temps = heatmap.temps();
    let codes = grid.codes_mut();

    let mut done = vec![false; codes.len()];
    let mut moved = 0;

    for row in 0..rows {
        for col in 0..cols {
            let i = row as usize * cols as usize + col as usize;
            if done[i] {
                continue;
            }
            done[i] = true;

            let code = codes[i];
            if code == -1 {
                // Wait expired: wake with a uniform random heading.
                codes[i] = 1 + rng.next_below(4) as CellCode;
                continue;
            }
            if code < -1 {
                codes[i] = code + 1;
                continue;
            }
            let Some(current) = Direction::from_code(code) else {
                // Empty cell or fixture: untouched.
                continue;
            };

            let mut dir = current;
            if rng.next_f64() < params.p_changedir {
                let draw = Direction::ALL[rng.next_below(3) as usize];
                dir = if draw == dir { Direction::West } else { draw };
            }

            let (dr, dc) = dir.offset();
            let tr = row as i32 + dr;
            let tc = col as i32 + dc;
            let target = if tr < 0 || tr >= rows as i32 || tc < 0 || tc >= cols as i32 {
                None
            } else {
                Some(tr as usize * cols as usize + tc as usize)
            };

            match target {
                Some(ti) if codes[ti] == cell::EMPTY => {
                    codes[ti] = dir.code();
                    codes[i] = cell::EMPTY;
                    done[ti] = true;
                    moved += 1;
                }
                Some(ti) if cell::is_bee_code(codes[ti]) => {
                    if rng.next_f64() < params.p_meet {
                        codes[i] = -wait_ticks(temps[i], params);
                    } else {
                        codes[i] = dir.code();
                    }
                }
                // Arena edge, wall, heater, or cooler ahead.
                _ => {
                    if rng.next_f64() < params.p_wall {
                        codes[i] = -wait_ticks(temps[i], params);
                    } else {
                        codes[i] = dir.reversed().code();
                    }
                }
            }
        }
    }

    moved
}

/// Wait duration at local temperature `temp`:
/// `⌊k_stay / (1 + |temp − t_ideal|)⌋` clamped into
/// `[min_wait, i16::MAX]`.
fn wait_ticks(temp: f64, params: &TickParams) -> CellCode {
    let raw = (params.k_stay / (1.0 + (temp - params.t_ideal).abs())).floor();
    let lo = f64::from(params.min_wait.min(i16::MAX as u16));
    raw.clamp(lo, f64::from(i16::MAX)) as CellCode
}
