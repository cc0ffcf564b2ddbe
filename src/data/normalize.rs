use super::model::LightcurveError;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Divide every flux by the mean flux, so that 1.0 means "average brightness".
pub fn normalize(fluxes: &[f64]) -> Result<Vec<f64>, LightcurveError> {
    let average = match mean(fluxes) {
        Some(m) if m != 0.0 => m,
        _ => return Err(LightcurveError::ZeroMean),
    };

    Ok(fluxes.iter().map(|f| f / average).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[10.0, 20.0, 30.0]), Some(20.0));
    }

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize(&[10.0, 20.0, 30.0]).unwrap(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_normalized_mean_is_one() {
        let inputs: [&[f64]; 4] = [
            &[1.0],
            &[3.0, 7.0, 11.5],
            &[-4.0, -2.0, -9.0],
            &[1.0e5, 1.02e5, 0.98e5, 1.01e5, 0.97e5],
        ];
        for fluxes in inputs {
            let out = normalize(fluxes).unwrap();
            assert_eq!(out.len(), fluxes.len());
            let m = mean(&out).unwrap();
            assert!((m - 1.0).abs() < 1e-12, "mean {m} for {fluxes:?}");
        }
    }

    #[test]
    fn test_zero_mean_fails() {
        assert_eq!(normalize(&[-1.0, 1.0]), Err(LightcurveError::ZeroMean));
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), Err(LightcurveError::ZeroMean));
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(normalize(&[]), Err(LightcurveError::ZeroMean));
    }
}
