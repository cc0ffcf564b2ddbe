use std::path::PathBuf;

use fitsio::FitsFile;
use fitsio::hdu::{FitsHdu, HduInfo};
use fitsio::tables::ColumnDataType;
use thiserror::Error;

use super::model::{FluxPrecision, Lightcurve, LightcurveError};
use crate::config::ConvertOptions;

/// Errors that can occur while reading a lightcurve table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("FITS I/O error: {0}")]
    Fits(#[from] fitsio::errors::Error),
    #[error("failed to read column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: fitsio::errors::Error,
    },
    #[error(transparent)]
    Lightcurve(#[from] LightcurveError),
}

// ---------------------------------------------------------------------------
// FITS loader
// ---------------------------------------------------------------------------

/// Read the time and flux columns of a FITS binary table.
///
/// Expected layout (TESS SPOC lightcurve files):
/// - HDU 0: primary header, no data
/// - HDU 1: `LIGHTCURVE` table with `TIME` (Float64, BTJD) and
///   `PDCSAP_FLUX` (Float32, e-/s), NaN where the measurement is missing
///
/// The file, HDU index and column names come from `options`, so other
/// missions with the same shape of table can be read too. Values are widened
/// to `f64`; a Float32 flux column is recorded as [`FluxPrecision::Single`].
pub fn load_fits(options: &ConvertOptions) -> Result<Lightcurve, LoadError> {
    let path = options.input.as_path();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut fptr = FitsFile::open(path)?;
    let hdu = fptr.hdu(options.hdu)?;

    let times: Vec<f64> = hdu
        .read_col(&mut fptr, options.time_column.as_str())
        .map_err(|source| LoadError::Column {
            column: options.time_column.clone(),
            source,
        })?;
    let fluxes: Vec<f64> = hdu
        .read_col(&mut fptr, options.flux_column.as_str())
        .map_err(|source| LoadError::Column {
            column: options.flux_column.clone(),
            source,
        })?;

    let precision = column_precision(&hdu, &options.flux_column);

    log::info!(
        "Read {} samples from HDU {} of {} (flux precision: {:?})",
        times.len(),
        options.hdu,
        path.display(),
        precision
    );

    Ok(Lightcurve::new(times, fluxes)?.with_precision(precision))
}

/// Storage width of a table column. Anything that is not a Float32 column
/// is treated as `Double`.
fn column_precision(hdu: &FitsHdu, column: &str) -> FluxPrecision {
    let HduInfo::TableInfo {
        column_descriptions,
        ..
    } = &hdu.info
    else {
        return FluxPrecision::Double;
    };

    match column_descriptions.iter().find(|c| c.name == column) {
        Some(c) if matches!(c.data_type.typ, ColumnDataType::Float) => FluxPrecision::Single,
        _ => FluxPrecision::Double,
    }
}
