use rand::Rng;
use rand_distr::{Distribution, Exp, Gamma, Normal, Uniform};

use crate::error::{Error, Result};
use crate::models::{DistributionKind, ServiceConfig};

/// Draws one integer service duration per call from the configured
/// continuous distribution: sample, clamp below at zero, round up.
pub enum ServiceSampler {
    Normal(Normal<f64>),
    Uniform(Uniform<f64>),
    Gamma(Gamma<f64>),
    Exponential(Exp<f64>),
}

impl ServiceSampler {
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let kind = config.kind;
        if config.params.len() != kind.arity() {
            return Err(Error::InvalidDistributionParams {
                kind: kind.to_string(),
                reason: format!(
                    "expected {} parameters, got {}",
                    kind.arity(),
                    config.params.len()
                ),
            });
        }
        let bad = |reason: String| Error::InvalidDistributionParams {
            kind: kind.to_string(),
            reason,
        };

        match kind {
            DistributionKind::Normal => {
                let (mean, std_dev) = (config.params[0], config.params[1]);
                Normal::new(mean, std_dev)
                    .map(Self::Normal)
                    .map_err(|err| bad(err.to_string()))
            }
            DistributionKind::Uniform => {
                let (low, high) = (config.params[0], config.params[1]);
                if !low.is_finite() || !high.is_finite() || low > high {
                    return Err(bad(format!("invalid range [{}, {}]", low, high)));
                }
                Ok(Self::Uniform(Uniform::new_inclusive(low, high)))
            }
            DistributionKind::Gamma => {
                let (shape, scale) = (config.params[0], config.params[1]);
                Gamma::new(shape, scale)
                    .map(Self::Gamma)
                    .map_err(|err| bad(err.to_string()))
            }
            DistributionKind::Exponential => {
                let rate = config.params[0];
                if !(rate > 0.0) {
                    return Err(bad(format!("rate must be > 0 (got {})", rate)));
                }
                Exp::new(rate)
                    .map(Self::Exponential)
                    .map_err(|err| bad(err.to_string()))
            }
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let raw = match self {
            Self::Normal(dist) => dist.sample(rng),
            Self::Uniform(dist) => dist.sample(rng),
            Self::Gamma(dist) => dist.sample(rng),
            Self::Exponential(dist) => dist.sample(rng),
        };
        raw.max(0.0).ceil() as u64
    }
}
