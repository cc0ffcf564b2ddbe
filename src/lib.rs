//! Convert TESS lightcurve FITS tables into `flux,julian_date` CSV files.
//!
//! ```text
//! load_fits → remove_nan → normalize (optional) → write_csv
//! ```
//!
//! [`app::convert`] runs the whole pipeline for a given [`ConvertOptions`];
//! [`app::run_interactive`] wraps it with the prompt loop used by the binary.

pub mod app;
pub mod config;
pub mod data;

pub use config::ConvertOptions;
pub use data::model::{FluxPrecision, Lightcurve, LightcurveError, Sample};
