//! Simulation parameters.
//!
//! Plain structs with public fields, validated once at the façade
//! boundary. The kernels trust their inputs.

use crate::error::ParamError;

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NotFinite { name, value })
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ParamError> {
    check_finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamError::NotAProbability { name, value })
    }
}

/// Parameters of the heatmap kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatParams {
    /// Temperature of heater cells.
    pub t_heater: f64,
    /// Temperature of cooler cells.
    pub t_cooler: f64,
    /// Ambient temperature of cells with no reachable source.
    pub t_env: f64,
    /// Coupling coefficient applied to the net source contribution.
    pub k_temp: f64,
}

impl HeatParams {
    /// Check that every field is finite.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ParamError`].
    pub fn validate(&self) -> Result<(), ParamError> {
        check_finite("t_heater", self.t_heater)?;
        check_finite("t_cooler", self.t_cooler)?;
        check_finite("t_env", self.t_env)?;
        check_finite("k_temp", self.k_temp)
    }
}

impl Default for HeatParams {
    /// Reference parameterisation: warm heaters, cold coolers, mild ambient.
    fn default() -> HeatParams {
        HeatParams {
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            k_temp: 0.9,
        }
    }
}

/// Parameters of the tick kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickParams {
    /// Probability that an active bee re-draws its heading this tick.
    pub p_changedir: f64,
    /// Probability that a wall hit turns into a wait.
    pub p_wall: f64,
    /// Probability that meeting another bee turns into a wait.
    pub p_meet: f64,
    /// Lower bound on any wait countdown, in ticks. At least 1.
    pub min_wait: u16,
    /// Wait-duration scale: `wait = ⌊k_stay / (1 + |T − t_ideal|)⌋`.
    pub k_stay: f64,
    /// The temperature bees prefer; waits lengthen near it.
    pub t_ideal: f64,
}

impl TickParams {
    /// Check probabilities are in `[0, 1]`, floats finite, `k_stay >= 0`,
    /// and `min_wait >= 1`.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ParamError`].
    pub fn validate(&self) -> Result<(), ParamError> {
        check_probability("p_changedir", self.p_changedir)?;
        check_probability("p_wall", self.p_wall)?;
        check_probability("p_meet", self.p_meet)?;
        check_finite("k_stay", self.k_stay)?;
        if self.k_stay < 0.0 {
            return Err(ParamError::NegativeStay { value: self.k_stay });
        }
        check_finite("t_ideal", self.t_ideal)?;
        if self.min_wait == 0 {
            return Err(ParamError::ZeroMinWait);
        }
        Ok(())
    }
}

impl Default for TickParams {
    /// Reference parameterisation from the classic BeeClust experiments.
    fn default() -> TickParams {
        TickParams {
            p_changedir: 0.2,
            p_wall: 0.8,
            p_meet: 0.8,
            min_wait: 1,
            k_stay: 50.0,
            t_ideal: 32.0,
        }
    }
}
