use thiserror::Error;

use super::filter::remove_nan;
use super::normalize::normalize;

// ---------------------------------------------------------------------------
// LightcurveError – invariant violations in the numeric pipeline
// ---------------------------------------------------------------------------

/// Errors raised while validating, cleaning or normalizing a lightcurve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightcurveError {
    #[error("length of date data is {times}, which is not equal to length of fluxes ({fluxes})")]
    LengthMismatch { times: usize, fluxes: usize },
    #[error("the average of the flux data is 0. Is the length of the data greater than 0?")]
    ZeroMean,
}

// ---------------------------------------------------------------------------
// Sample – one (timestamp, flux) pair
// ---------------------------------------------------------------------------

/// A single brightness measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Barycentric TESS Julian date.
    pub timestamp: f64,
    pub flux: f64,
}

// ---------------------------------------------------------------------------
// FluxPrecision – storage width of the source flux column
// ---------------------------------------------------------------------------

/// Width of the flux values as stored in the input table.
///
/// Fluxes are always held as `f64`. A `Single` lightcurve's values are exact
/// widenings of `f32`s and are written back out at that width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FluxPrecision {
    Single,
    #[default]
    Double,
}

// ---------------------------------------------------------------------------
// Lightcurve – parallel time / flux columns
// ---------------------------------------------------------------------------

/// A chronological series of flux measurements.
///
/// `times` and `fluxes` are index-aligned and always the same length; the
/// only way to build one is through [`Lightcurve::new`], which checks that.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightcurve {
    times: Vec<f64>,
    fluxes: Vec<f64>,
    precision: FluxPrecision,
}

impl Lightcurve {
    pub fn new(times: Vec<f64>, fluxes: Vec<f64>) -> Result<Self, LightcurveError> {
        if times.len() != fluxes.len() {
            return Err(LightcurveError::LengthMismatch {
                times: times.len(),
                fluxes: fluxes.len(),
            });
        }
        Ok(Self {
            times,
            fluxes,
            precision: FluxPrecision::Double,
        })
    }

    /// Mark the fluxes as coming from a narrower column.
    pub fn with_precision(mut self, precision: FluxPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> FluxPrecision {
        self.precision
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn fluxes(&self) -> &[f64] {
        &self.fluxes
    }

    /// Iterate over the samples in chronological order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(&self.fluxes)
            .map(|(&timestamp, &flux)| Sample { timestamp, flux })
    }

    /// Drop every sample whose flux is NaN.
    pub fn remove_nan(&self) -> Result<Self, LightcurveError> {
        let (times, fluxes) = remove_nan(&self.times, &self.fluxes)?;
        Ok(Self::new(times, fluxes)?.with_precision(self.precision))
    }

    /// Rescale fluxes so their mean is 1.0. Timestamps are untouched.
    ///
    /// The quotients are computed in `f64`, so the result is `Double`.
    pub fn normalized(&self) -> Result<Self, LightcurveError> {
        let fluxes = normalize(&self.fluxes)?;
        Self::new(self.times.clone(), fluxes)
    }
}
