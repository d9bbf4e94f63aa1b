use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config;
use crate::error::{Error, Result};
use crate::models::{DistributionKind, ServiceConfig, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "queue-sim", about = "Multi-server queueing simulator")]
pub struct Args {
    /// Load the run configuration from a TOML or JSON file
    #[arg(long, conflicts_with_all = ["rate", "servers", "jobs", "service", "seed"])]
    pub config: Option<PathBuf>,
    /// Poisson arrival rate (lambda)
    #[arg(long)]
    pub rate: Option<f64>,
    /// Number of servers in the pool
    #[arg(long)]
    pub servers: Option<usize>,
    /// Number of jobs to simulate
    #[arg(long)]
    pub jobs: Option<usize>,
    /// Service distribution as kind:params, e.g. normal:5,1.5 or exponential:0.4
    #[arg(long)]
    pub service: Option<String>,
    /// RNG seed; identical seeds reproduce identical runs
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

pub fn build_config(args: &Args) -> Result<SimConfig> {
    if let Some(path) = &args.config {
        return config::load_config(path);
    }

    let rate = require(args.rate, "--rate")?;
    let servers = require(args.servers, "--servers")?;
    let jobs = require(args.jobs, "--jobs")?;
    let service = parse_service(require(args.service.as_deref(), "--service")?)?;

    Ok(SimConfig {
        rate,
        servers,
        jobs,
        service,
        seed: args.seed,
    })
}

fn require<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.ok_or_else(|| Error::Cli(format!("{} is required unless --config is given", flag)))
}

/// Parse `kind:p1[,p2]` into a service config. Parameter count is checked
/// later when the sampler is built.
pub fn parse_service(input: &str) -> Result<ServiceConfig> {
    let trimmed = input.trim();
    let (kind_str, params_str) = match trimmed.split_once(':') {
        Some((kind, params)) => (kind.trim(), params),
        None => (trimmed, ""),
    };

    let kind = match kind_str {
        "normal" => DistributionKind::Normal,
        "uniform" => DistributionKind::Uniform,
        "gamma" => DistributionKind::Gamma,
        "exponential" => DistributionKind::Exponential,
        other => return Err(Error::UnknownDistribution(other.to_string())),
    };

    let params = params_str
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| Error::InvalidDistributionParams {
                    kind: kind.to_string(),
                    reason: format!("'{}' is not a number", part),
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(ServiceConfig { kind, params })
}
