//! Shared grid-topology helpers for the kernels.
//!
//! The arena boundary absorbs: out-of-bounds neighbours are simply
//! dropped. Centralised here so the BFS kernels share one neighbour
//! enumeration.

use smallvec::SmallVec;

/// The 4 cardinal offsets: N, S, W, E.
pub(crate) const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub(crate) const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds neighbours of `(r, c)` for the given offset set.
pub(crate) fn neighbours<const N: usize>(
    r: u32,
    c: u32,
    rows: u32,
    cols: u32,
    offsets: &[(i32, i32); N],
) -> SmallVec<[(u32, u32); N]> {
    let mut result = SmallVec::new();
    for &(dr, dc) in offsets {
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < cols as i32 {
            result.push((nr as u32, nc as u32));
        }
    }
    result
}
