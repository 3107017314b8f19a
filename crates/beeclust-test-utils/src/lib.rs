//! Test fixtures for BeeClust development.
//!
//! - [`parse_grid`] — build a [`Grid`] from ASCII art.
//! - [`ScriptedRng`] — a [`RandomSource`] with fully scripted draws, so
//!   tick tests can force each probabilistic branch.
//!
//! Helpers here panic on misuse; they are test-only.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use beeclust_core::{cell, Grid, RandomSource};

/// Build a grid from ASCII art, one character per cell:
///
/// | Char | Cell |
/// |------|------|
/// | `.` | empty |
/// | `#` | wall |
/// | `H` | heater |
/// | `C` | cooler |
/// | `^` `>` `v` `<` | bee facing north / east / south / west |
///
/// Rows are separated by newlines and must all have the same width.
/// Waiting bees have no glyph; set them through [`Grid::set`] or
/// [`Grid::codes_mut`].
///
/// # Panics
///
/// Panics on an unknown character, ragged rows, or empty input.
pub fn parse_grid(art: &str) -> Grid {
    let lines: Vec<&str> = art.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    assert!(!lines.is_empty(), "grid art is empty");
    let cols = lines[0].chars().count();

    let mut codes = Vec::with_capacity(lines.len() * cols);
    for line in &lines {
        assert_eq!(line.chars().count(), cols, "ragged grid art row: {line:?}");
        for ch in line.chars() {
            codes.push(match ch {
                '.' => cell::EMPTY,
                '#' => cell::WALL,
                'H' => cell::HEATER,
                'C' => cell::COOLER,
                '^' => cell::BEE_NORTH,
                '>' => cell::BEE_EAST,
                'v' => cell::BEE_SOUTH,
                '<' => cell::BEE_WEST,
                other => panic!("unknown grid character {other:?}"),
            });
        }
    }

    Grid::from_codes(lines.len() as u32, cols as u32, codes).expect("grid art is well-formed")
}

/// A [`RandomSource`] that replays scripted draws.
///
/// Integer draws (`next_u32`, `next_below`) and float draws (`next_f64`)
/// pop from separate queues, so a test scripts exactly the branch rolls
/// it cares about. Running out of a queue panics — which doubles as an
/// assertion that the code under test consumed exactly the expected
/// number of draws.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    floats: VecDeque<f64>,
}

impl ScriptedRng {
    /// An empty script; any draw panics.
    pub fn new() -> ScriptedRng {
        ScriptedRng::default()
    }

    /// Append integer draws (consumed by `next_u32` / `next_below`).
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = u32>) -> ScriptedRng {
        self.ints.extend(ints);
        self
    }

    /// Append float draws (consumed by `next_f64`).
    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f64>) -> ScriptedRng {
        self.floats.extend(floats);
        self
    }

    /// Draws not yet consumed, `(ints, floats)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.ints.len(), self.floats.len())
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.ints
            .pop_front()
            .expect("ScriptedRng ran out of integer draws")
    }

    fn next_f64(&mut self) -> f64 {
        self.floats
            .pop_front()
            .expect("ScriptedRng ran out of float draws")
    }

    fn next_below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}
