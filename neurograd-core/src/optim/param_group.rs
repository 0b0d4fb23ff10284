use crate::error::NeuroGradError;
use crate::nn::parameter::dedup_parameters;
use crate::value::Value;

/// The parameters an optimizer updates together with their learning rate.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    pub params: Vec<Value>,
    lr: f64,
}

impl ParamGroup {
    /// Captures `params` in order, dropping repeated handles to the same node.
    ///
    /// `owner` names the optimizer in log and error messages.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        owner: &str,
    ) -> Result<Self, NeuroGradError> {
        validate_lr(lr, owner)?;
        let (params, duplicates) = dedup_parameters(params);
        if duplicates > 0 {
            log::warn!(
                "{} received {} duplicate parameter(s); each node is updated once per step",
                owner,
                duplicates
            );
        }
        log::debug!("{} created for {} parameters, lr={}", owner, params.len(), lr);
        Ok(ParamGroup { params, lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64, owner: &str) -> Result<(), NeuroGradError> {
        validate_lr(lr, owner)?;
        self.lr = lr;
        Ok(())
    }
}

fn validate_lr(lr: f64, owner: &str) -> Result<(), NeuroGradError> {
    if lr.is_nan() || lr < 0.0 {
        return Err(NeuroGradError::ConfigurationError(format!(
            "{}: learning rate must be non-negative, got {}",
            owner, lr
        )));
    }
    Ok(())
}
