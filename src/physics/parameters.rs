//! Physical constants of the slab problem
//!
//! `ProblemParameters` starts empty and is filled through setters. Each field
//! carries its own presence flag (an `Option`), so a getter on a field that
//! was never set fails with [`HeatError::UninitializedAccess`] instead of
//! returning a silent default.

use crate::error::{HeatError, HeatResult};

// =================================================================================================
// Problem Parameters
// =================================================================================================

/// Validated container of the constants of a heat conduction problem
///
/// | Field                  | Precondition | Unit (reference scenario) |
/// |------------------------|--------------|---------------------------|
/// | `diffusivity`          | `> 0`        | cm²/h                     |
/// | `width`                | `> 0`        | cm                        |
/// | `internal_temperature` | finite       | °C                        |
/// | `surface_temperature`  | finite       | °C                        |
/// | `time_stop`            | `> 0`        | h                         |
///
/// Solvers only ever read a `ProblemParameters`; they never mutate the one
/// handed to them.
///
/// # Example
///
/// ```rust
/// use heat_rs::physics::ProblemParameters;
///
/// let mut parameters = ProblemParameters::new();
/// assert!(!parameters.check_initialization());
///
/// parameters.set_diffusivity(93.0)?;
/// parameters.set_width(31.0)?;
/// parameters.set_internal_temperature(38.0)?;
/// parameters.set_surface_temperature(149.0)?;
/// parameters.set_time_stop(0.5)?;
///
/// assert!(parameters.check_initialization());
/// assert_eq!(parameters.width()?, 31.0);
/// # Ok::<(), heat_rs::HeatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProblemParameters {
    diffusivity: Option<f64>,
    width: Option<f64>,
    internal_temperature: Option<f64>,
    surface_temperature: Option<f64>,
    time_stop: Option<f64>,
}

impl ProblemParameters {
    /// Create an empty parameter set (every field unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fully initialised parameter set in one call
    ///
    /// Runs every setter, so the same preconditions apply.
    pub fn from_values(
        diffusivity: f64,
        width: f64,
        internal_temperature: f64,
        surface_temperature: f64,
        time_stop: f64,
    ) -> HeatResult<Self> {
        let mut parameters = Self::new();
        parameters.set_diffusivity(diffusivity)?;
        parameters.set_width(width)?;
        parameters.set_internal_temperature(internal_temperature)?;
        parameters.set_surface_temperature(surface_temperature)?;
        parameters.set_time_stop(time_stop)?;
        Ok(parameters)
    }

    // ========================================= Setters ===========================================

    /// Set the thermal diffusivity (must be strictly positive)
    pub fn set_diffusivity(&mut self, diffusivity: f64) -> HeatResult<()> {
        self.diffusivity = Some(positive("diffusivity", diffusivity, "diffusivity should be positive")?);
        Ok(())
    }

    /// Set the slab width (must be strictly positive)
    pub fn set_width(&mut self, width: f64) -> HeatResult<()> {
        self.width = Some(positive("width", width, "width should be positive")?);
        Ok(())
    }

    /// Set the initial temperature of the slab interior
    pub fn set_internal_temperature(&mut self, temperature: f64) -> HeatResult<()> {
        self.internal_temperature = Some(finite("internal_temperature", temperature)?);
        Ok(())
    }

    /// Set the fixed temperature imposed on both faces of the slab
    pub fn set_surface_temperature(&mut self, temperature: f64) -> HeatResult<()> {
        self.surface_temperature = Some(finite("surface_temperature", temperature)?);
        Ok(())
    }

    /// Set the time horizon of the simulation (must be strictly positive)
    ///
    /// The resolution starts from t = 0, so the limit has to lie after it.
    pub fn set_time_stop(&mut self, time_stop: f64) -> HeatResult<()> {
        self.time_stop = Some(positive(
            "time_stop",
            time_stop,
            "as the resolution starts from t=0, time limit should be positive",
        )?);
        Ok(())
    }

    // ========================================= Getters ===========================================

    /// Thermal diffusivity
    pub fn diffusivity(&self) -> HeatResult<f64> {
        self.diffusivity.ok_or(HeatError::UninitializedAccess { field: "diffusivity" })
    }

    /// Slab width
    pub fn width(&self) -> HeatResult<f64> {
        self.width.ok_or(HeatError::UninitializedAccess { field: "width" })
    }

    /// Initial interior temperature
    pub fn internal_temperature(&self) -> HeatResult<f64> {
        self.internal_temperature
            .ok_or(HeatError::UninitializedAccess { field: "internal_temperature" })
    }

    /// Boundary temperature
    pub fn surface_temperature(&self) -> HeatResult<f64> {
        self.surface_temperature
            .ok_or(HeatError::UninitializedAccess { field: "surface_temperature" })
    }

    /// Time horizon
    pub fn time_stop(&self) -> HeatResult<f64> {
        self.time_stop.ok_or(HeatError::UninitializedAccess { field: "time_stop" })
    }

    /// `true` only when all five fields have been set
    pub fn check_initialization(&self) -> bool {
        self.diffusivity.is_some()
            && self.width.is_some()
            && self.internal_temperature.is_some()
            && self.surface_temperature.is_some()
            && self.time_stop.is_some()
    }

    /// Copy of these parameters with a different time horizon
    ///
    /// Used to run a solver over a shortened horizon without touching the
    /// caller's parameter set.
    pub fn with_time_stop(&self, time_stop: f64) -> HeatResult<Self> {
        let mut copy = *self;
        copy.set_time_stop(time_stop)?;
        Ok(copy)
    }
}

fn positive(field: &'static str, value: f64, reason: &str) -> HeatResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HeatError::invalid(field, value, reason))
    }
}

fn finite(field: &'static str, value: f64) -> HeatResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HeatError::invalid(field, value, "temperature must be a finite number"))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
