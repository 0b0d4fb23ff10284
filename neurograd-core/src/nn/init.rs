use crate::error::NeuroGradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Initial value distribution for trainable parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` samples.
    ///
    /// # Errors
    /// Returns `NeuroGradError::ConfigurationError` for an empty, inverted or
    /// non-finite uniform range, or a negative or non-finite standard
    /// deviation. A zero deviation is accepted and samples `mean`.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, NeuroGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(NeuroGradError::ConfigurationError(format!(
                        "Uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std } => {
                if !(mean.is_finite() && std.is_finite() && std >= 0.0) {
                    return Err(NeuroGradError::ConfigurationError(format!(
                        "Normal init requires finite mean and std >= 0, got mean {} and std {}",
                        mean, std
                    )));
                }
                let dist = Normal::new(mean, std).map_err(|e| {
                    NeuroGradError::ConfigurationError(format!(
                        "Normal init with mean {} and std {}: {}",
                        mean, std, e
                    ))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(value) => Ok(vec![value; n]),
        }
    }

    /// Draws `n` fresh leaf values.
    pub fn values<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Value>, NeuroGradError> {
        Ok(self.sample_n(n, rng)?.into_iter().map(Value::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Init;
    use crate::error::NeuroGradError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_uniform_range() -> Result<(), NeuroGradError> {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = Init::default().sample_n(1000, &mut rng)?;
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|x| (-1.0..1.0).contains(x)));
        Ok(())
    }

    #[test]
    fn test_same_seed_same_values() -> Result<(), NeuroGradError> {
        let init = Init::Normal { mean: 0.0, std: 0.5 };
        let a = init.sample_n(16, &mut StdRng::seed_from_u64(42))?;
        let b = init.sample_n(16, &mut StdRng::seed_from_u64(42))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_constant_init() -> Result<(), NeuroGradError> {
        let mut rng = StdRng::seed_from_u64(0);
        let values = Init::Constant(0.25).values(3, &mut rng)?;
        assert!(values.iter().all(|v| v.data() == 0.25 && v.is_leaf()));
        Ok(())
    }

    #[test]
    fn test_invalid_configurations() {
        let mut rng = StdRng::seed_from_u64(0);
        let inverted = Init::Uniform { low: 1.0, high: -1.0 };
        assert!(matches!(
            inverted.sample_n(1, &mut rng),
            Err(NeuroGradError::ConfigurationError(_))
        ));
        let negative_std = Init::Normal { mean: 0.0, std: -1.0 };
        assert!(matches!(
            negative_std.sample_n(1, &mut rng),
            Err(NeuroGradError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_normal_std_validation() -> Result<(), NeuroGradError> {
        let mut rng = StdRng::seed_from_u64(0);
        for std in [-1.0, -1e-12, f64::NAN, f64::INFINITY] {
            let init = Init::Normal { mean: 0.0, std };
            assert!(
                matches!(init.sample_n(3, &mut rng), Err(NeuroGradError::ConfigurationError(_))),
                "std {} was accepted",
                std
            );
        }
        let degenerate = Init::Normal { mean: 0.5, std: 0.0 }.sample_n(4, &mut rng)?;
        assert_eq!(degenerate, vec![0.5; 4]);
        Ok(())
    }
}
