use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::layers::dense::Layer;
use crate::network::topology::Topology;

#[derive(Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    /// All weights and biases are drawn from an RNG seeded with `seed`, so
    /// equal seeds give identical initial networks.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, &mut rng))
            .collect();
        Network { layers }
    }

    /// Regression network: `input_size` features, hidden layers per
    /// `topology` with the given activation, one linear output node.
    pub fn regression(
        input_size: usize,
        topology: &Topology,
        activation: ActivationFunction,
        seed: u64,
    ) -> Network {
        Network::new(topology.layer_specs(input_size, activation), seed)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regression_network_has_linear_scalar_output() {
        let topo = Topology::new(vec![5]).unwrap();
        let mut net = Network::regression(8, &topo, ActivationFunction::Sigmoid, 42);

        assert_eq!(net.layers.len(), 2);
        assert_eq!(net.layers[1].size, 1);
        assert_eq!(net.layers[1].activator, ActivationFunction::Identity);

        let out = net.forward(vec![0.1; 8]);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_finite());
    }

    #[test]
    fn equal_seeds_give_equal_networks() {
        let topo = Topology::default();
        let mut a = Network::regression(3, &topo, ActivationFunction::Sigmoid, 9);
        let mut b = Network::regression(3, &topo, ActivationFunction::Sigmoid, 9);

        let input = vec![0.2, 0.4, 0.6];
        assert_eq!(a.forward(input.clone()), b.forward(input));
    }
}
