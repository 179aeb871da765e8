use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully-connected layer.
///
/// Weights and biases are the persistent state; `neurons` and `pre_neurons`
/// are the activations cached by the last forward pass and are not serialized.
#[derive(Debug, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    #[serde(skip)]
    pub neurons: Matrix,
    #[serde(skip)]
    pre_neurons: Matrix, // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::random(input_size, size, rng),
            biases: Matrix::random(1, size, rng),
            activator: activation,
        }
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // Element-wise (Hadamard) product: δ = error ⊙ σ'(z)
        let layer_delta = hadamard(&next_layer_delta, &act_derivative);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a.data.iter().zip(b.data.iter())
        .map(|(row_a, row_b)| {
            row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
        })
        .collect();
    Matrix::from_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn forward_with_known_weights() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Layer::new(1, 2, ActivationFunction::Identity, &mut rng);
        layer.weights = Matrix::from_data(vec![vec![2.0], vec![3.0]]);
        layer.biases = Matrix::from_data(vec![vec![-1.0]]);

        let out = layer.feed_from(vec![1.0, 1.0]);
        assert_eq!(out, vec![4.0]); // 2 + 3 - 1
    }

    #[test]
    fn gradient_shapes_match_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut layer = Layer::new(3, 2, ActivationFunction::Sigmoid, &mut rng);
        layer.feed_from(vec![0.5, -0.5]);

        let delta = Matrix::from_data(vec![vec![0.1, 0.2, 0.3]]);
        let input = Matrix::from_data(vec![vec![0.5, -0.5]]);
        let (w_grad, b_grad) = layer.compute_gradients(delta, &input);

        assert_eq!((w_grad.rows, w_grad.cols), (2, 3));
        assert_eq!((b_grad.rows, b_grad.cols), (1, 3));
    }
}
