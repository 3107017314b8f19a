//! Error types for the BeeClust core.
//!
//! Errors surface only at the façade boundary (construction and
//! validation). The kernels themselves are infallible: malformed input
//! there is a programming error, not a runtime condition.

use std::error::Error;
use std::fmt;

use crate::cell::CellCode;

/// Errors from grid or heatmap construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// The provided cell buffer does not match `rows * cols`.
    CellCountMismatch {
        /// Expected number of cells.
        expected: usize,
        /// Length of the provided buffer.
        got: usize,
    },
    /// A cell holds a code outside the legal table.
    IllegalCellCode {
        /// The offending code.
        code: CellCode,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellCountMismatch { expected, got } => {
                write!(f, "expected {expected} cells, got {got}")
            }
            Self::IllegalCellCode { code } => write!(f, "illegal cell code {code}"),
        }
    }
}

impl Error for GridError {}

/// Errors from simulation-parameter validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// A float parameter is NaN or infinite.
    NotFinite {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A probability parameter is outside `[0, 1]`.
    NotAProbability {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// `k_stay` is negative.
    NegativeStay {
        /// The offending value.
        value: f64,
    },
    /// `min_wait` is zero; a zero wait would pack as an empty cell.
    ZeroMinWait,
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NotAProbability { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            Self::NegativeStay { value } => {
                write!(f, "k_stay must be >= 0, got {value}")
            }
            Self::ZeroMinWait => write!(f, "min_wait must be at least 1"),
        }
    }
}

impl Error for ParamError {}
