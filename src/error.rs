use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("arrival rate must be > 0 (got {0})")]
    InvalidArrivalRate(f64),
    #[error("server count must be >= 1")]
    ServersZero,
    #[error("job count must be >= 1")]
    JobsZero,
    #[error("unknown service distribution '{0}'")]
    UnknownDistribution(String),
    #[error("invalid parameters for {kind}: {reason}")]
    InvalidDistributionParams { kind: String, reason: String },
    #[error("no completed jobs to aggregate")]
    EmptyResult,
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
