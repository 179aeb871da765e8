use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;

/// Ordered hidden-layer widths of a regression network.
///
/// The input width (number of features) and the single linear output node are
/// implied; a topology only describes what sits between them. The default is
/// one hidden node, the smallest configuration in the study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub hidden: Vec<usize>,
}

impl Default for Topology {
    fn default() -> Self {
        Topology { hidden: vec![1] }
    }
}

impl Topology {
    /// Builds a topology, rejecting empty layer lists and zero-width layers.
    pub fn new(hidden: Vec<usize>) -> Result<Topology, String> {
        if hidden.is_empty() {
            return Err("topology must have at least one hidden layer".to_string());
        }
        if let Some(pos) = hidden.iter().position(|&w| w == 0) {
            return Err(format!("hidden layer {} has zero width", pos + 1));
        }
        Ok(Topology { hidden })
    }

    /// Expands into (size, input_size, activation) specs for `Network::new`:
    /// each hidden layer uses `activation`, the output layer is a single
    /// linear node.
    pub fn layer_specs(
        &self,
        input_size: usize,
        activation: ActivationFunction,
    ) -> Vec<(usize, usize, ActivationFunction)> {
        let mut specs = Vec::with_capacity(self.hidden.len() + 1);
        let mut fan_in = input_size;

        for &width in &self.hidden {
            specs.push((width, fan_in, activation));
            fan_in = width;
        }
        specs.push((1, fan_in, ActivationFunction::Identity));

        specs
    }
}
