/// Sum-of-squared-errors loss, with the conventional ½ factor so that the
/// per-output gradient is simply `predicted - expected`.
pub struct SseLoss;

impl SseLoss {
    /// Scalar loss for one sample: ½ Σ(predicted - expected)²
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        0.5 * predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_loss_on_exact_prediction() {
        assert_eq!(SseLoss::loss(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn loss_and_gradient_agree() {
        let loss = SseLoss::loss(&[3.0], &[1.0]);
        assert!((loss - 2.0).abs() < 1e-12); // ½ · (3-1)²

        let grad = SseLoss::derivative(&[3.0], &[1.0]);
        assert_eq!(grad, vec![2.0]);
    }
}
