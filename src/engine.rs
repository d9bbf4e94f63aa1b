use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::arrivals::generate_arrivals;
use crate::error::{Error, Result};
use crate::metrics::{aggregate, server_usage, total_span};
use crate::models::SimConfig;
use crate::pool::ServerPool;
use crate::service::ServiceSampler;
use crate::state::{Job, RunMetadata, SimulationResult};

/// Run one simulation: validate, generate arrivals, fold jobs through the
/// pool in arrival order, aggregate. A pure function of config + seed; on any
/// validation failure nothing is simulated and no partial result exists.
pub fn run_simulation(config: &SimConfig) -> Result<SimulationResult> {
    validate_config(config)?;
    let sampler = ServiceSampler::from_config(&config.service)?;
    let mut pool = ServerPool::new(config.servers)?;
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));

    let plan = generate_arrivals(config.rate, config.jobs, &mut rng);
    let mut jobs = Vec::with_capacity(plan.epochs().len());
    for (idx, &arrival) in plan.epochs().iter().enumerate() {
        let service = sampler.sample(&mut rng);
        let placement = pool.assign(arrival, service);
        let wait = placement.start - arrival;
        jobs.push(Job {
            id: idx + 1,
            server: placement.server + 1,
            arrival,
            service,
            start: placement.start,
            finish: placement.finish,
            turnaround: wait + service,
            wait,
            response: wait,
        });
    }

    let totals = aggregate(&jobs)?;
    let span = total_span(&jobs);
    let usage = server_usage(pool.busy_times(), span);

    Ok(SimulationResult {
        jobs,
        totals,
        usage,
        metadata: RunMetadata {
            service: config.service.label(),
            servers: config.servers,
            seed: config.seed,
            span,
        },
    })
}

fn validate_config(config: &SimConfig) -> Result<()> {
    if !(config.rate > 0.0) {
        return Err(Error::InvalidArrivalRate(config.rate));
    }
    if config.servers == 0 {
        return Err(Error::ServersZero);
    }
    if config.jobs == 0 {
        return Err(Error::JobsZero);
    }
    Ok(())
}
