use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("correlation is undefined for fewer than two observations")]
    TooFewObservations,
    #[error("correlation is undefined: the {which} series is constant")]
    ConstantSeries { which: &'static str },
}

/// Pearson correlation coefficient of two equal-length series.
///
/// Defined only when both series have nonzero variance; a constant series is
/// reported as an explicit error rather than a silent NaN.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<f64, CorrelationError> {
    if a.len() != b.len() {
        return Err(CorrelationError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.len() < 2 {
        return Err(CorrelationError::TooFewObservations);
    }

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a).powi(2);
        var_b += (y - mean_b).powi(2);
    }

    if var_a == 0.0 {
        return Err(CorrelationError::ConstantSeries { which: "first" });
    }
    if var_b == 0.0 {
        return Err(CorrelationError::ConstantSeries { which: "second" });
    }

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_correlation_is_one() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let corr = pearson(&a, &a).unwrap();
        assert!((corr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_is_symmetric() {
        let a = [1.0, 2.0, 4.0, 3.0, 5.0];
        let b = [2.0, 1.0, 3.0, 5.0, 4.0];
        assert_eq!(pearson(&a, &b).unwrap(), pearson(&b, &a).unwrap());
    }

    #[test]
    fn invariant_under_affine_transforms() {
        let a = [12.0, 47.5, 33.1, 80.2, 21.9];
        let b = [1.3, 4.1, 2.8, 7.7, 2.2];

        // Rescale both series as min-max normalization would.
        let scale = |s: &[f64], m: f64, r: f64| -> Vec<f64> {
            s.iter().map(|x| (x - m) / r).collect()
        };
        let a_norm = scale(&a, 12.0, 68.2);
        let b_norm = scale(&b, 1.3, 6.4);

        let orig = pearson(&a, &b).unwrap();
        let norm = pearson(&a_norm, &b_norm).unwrap();
        assert!((orig - norm).abs() < 1e-12);
    }

    #[test]
    fn constant_series_is_explicitly_undefined() {
        let constant = [3.0, 3.0, 3.0];
        let varying = [1.0, 2.0, 3.0];
        assert_eq!(
            pearson(&constant, &varying),
            Err(CorrelationError::ConstantSeries { which: "first" })
        );
        assert_eq!(
            pearson(&varying, &constant),
            Err(CorrelationError::ConstantSeries { which: "second" })
        );
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            pearson(&[1.0], &[1.0, 2.0]),
            Err(CorrelationError::LengthMismatch { left: 1, right: 2 })
        );
    }
}
