use crate::error::NeuroGradError;
use crate::nn::functional;
use crate::nn::module::Module;
use crate::value::Value;

/// Layer applying `tanh` to every input. Has no parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tanh;

impl Tanh {
    pub fn new() -> Self {
        Tanh
    }
}

impl Module for Tanh {
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(functional::tanh(input))
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        Vec::new()
    }
}

/// Layer applying the rectified linear unit to every input. Has no parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReLU;

impl ReLU {
    pub fn new() -> Self {
        ReLU
    }
}

impl Module for ReLU {
    type Output = Vec<Value>;

    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(functional::relu(input))
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        Vec::new()
    }
}
