use super::model::LightcurveError;

/// Keep only the samples whose flux is a number.
///
/// `times` and `fluxes` are treated as parallel columns: index `i` of one
/// belongs with index `i` of the other. Surviving pairs keep their relative
/// order. Timestamps are not inspected.
pub fn remove_nan(
    times: &[f64],
    fluxes: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), LightcurveError> {
    if times.len() != fluxes.len() {
        return Err(LightcurveError::LengthMismatch {
            times: times.len(),
            fluxes: fluxes.len(),
        });
    }

    let (kept_times, kept_fluxes): (Vec<f64>, Vec<f64>) = times
        .iter()
        .zip(fluxes)
        .filter(|(_, flux)| !flux.is_nan())
        .map(|(&t, &f)| (t, f))
        .unzip();

    let dropped = fluxes.len() - kept_fluxes.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} of {} samples with NaN flux", fluxes.len());
    }

    Ok((kept_times, kept_fluxes))
}
