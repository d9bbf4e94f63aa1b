use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimConfig {
    pub rate: f64,
    pub servers: usize,
    pub jobs: usize,
    pub service: ServiceConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub kind: DistributionKind,
    pub params: Vec<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionKind {
    Normal,
    Uniform,
    Gamma,
    Exponential,
}

impl DistributionKind {
    /// Number of parameters the distribution takes.
    pub fn arity(self) -> usize {
        match self {
            DistributionKind::Normal | DistributionKind::Uniform | DistributionKind::Gamma => 2,
            DistributionKind::Exponential => 1,
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DistributionKind::Normal => "normal",
            DistributionKind::Uniform => "uniform",
            DistributionKind::Gamma => "gamma",
            DistributionKind::Exponential => "exponential",
        };
        write!(f, "{}", label)
    }
}

impl ServiceConfig {
    pub fn label(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!("{}({})", self.kind, params)
    }
}
