use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Hidden-node activation function.
///
/// `Sigmoid` (logistic) is the default used throughout the strength study;
/// `Softplus` is the smooth-ReLU alternative evaluated for the deepest
/// configuration. `Identity` is reserved for the linear output layer of
/// regression networks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Softplus,
    Tanh,
    ReLU,
    Identity,
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Sigmoid
    }
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Softplus => (1.0 + E.powf(x)).ln(),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            // d/dx log(1 + e^x) = logistic(x)
            ActivationFunction::Softplus => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half() {
        let s = ActivationFunction::Sigmoid;
        assert!((s.function(0.0) - 0.5).abs() < 1e-12);
        assert!((s.derivative(0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn softplus_derivative_is_sigmoid() {
        let sp = ActivationFunction::Softplus;
        let sig = ActivationFunction::Sigmoid;
        for &x in &[-3.0, -0.5, 0.0, 0.5, 3.0] {
            assert!((sp.derivative(x) - sig.function(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn softplus_matches_log1p_form() {
        let sp = ActivationFunction::Softplus;
        assert!((sp.function(0.0) - 2.0_f64.ln()).abs() < 1e-12);
        // For large x, softplus(x) ≈ x.
        assert!((sp.function(30.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn identity_passes_through() {
        let id = ActivationFunction::Identity;
        assert_eq!(id.function(-4.2), -4.2);
        assert_eq!(id.derivative(-4.2), 1.0);
    }
}
