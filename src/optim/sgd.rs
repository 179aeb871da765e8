use crate::{math::matrix::Matrix, layers::dense::Layer};

/// Stochastic gradient descent over mini-batch gradient sums.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Averages gradients summed over `batch_size` samples and applies one
    /// descent step to the layer.
    pub fn step_batch(
        &self,
        layer: &mut Layer,
        weights_grad_sum: Matrix,
        biases_grad_sum: Matrix,
        batch_size: usize,
    ) {
        let inv = 1.0 / batch_size as f64;
        layer.apply_gradients(
            weights_grad_sum.map(|x| x * inv),
            biases_grad_sum.map(|x| x * inv),
            self.learning_rate,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn step_averages_the_gradient_sum_before_descending() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Layer::new(1, 1, ActivationFunction::Identity, &mut rng);
        layer.weights = Matrix::from_data(vec![vec![1.0]]);
        layer.biases = Matrix::from_data(vec![vec![0.5]]);

        // Gradient sums over a batch of 4; mean gradient is (2.0, 1.0).
        let w_sum = Matrix::from_data(vec![vec![8.0]]);
        let b_sum = Matrix::from_data(vec![vec![4.0]]);

        let optimizer = Sgd::new(0.1);
        optimizer.step_batch(&mut layer, w_sum, b_sum, 4);

        assert!((layer.weights.data[0][0] - 0.8).abs() < 1e-12); // 1.0 - 0.1·2.0
        assert!((layer.biases.data[0][0] - 0.4).abs() < 1e-12); // 0.5 - 0.1·1.0
    }
}
