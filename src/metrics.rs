use crate::error::{Error, Result};
use crate::state::{Job, MetricRow, ServerUsage, Totals};

/// Sum and mean of each timing metric across all jobs. The mean is undefined
/// for zero jobs, so an empty trace is an error rather than a row of zeros.
pub fn aggregate(jobs: &[Job]) -> Result<Totals> {
    if jobs.is_empty() {
        return Err(Error::EmptyResult);
    }

    let row = |pick: fn(&Job) -> u64| {
        let sum: u64 = jobs.iter().map(pick).sum();
        MetricRow {
            sum,
            mean: round_to(sum as f64 / jobs.len() as f64, 2),
        }
    };

    Ok(Totals {
        service: row(|job| job.service),
        turnaround: row(|job| job.turnaround),
        wait: row(|job| job.wait),
        response: row(|job| job.response),
    })
}

/// Total simulated span: the latest finish over all jobs.
pub fn total_span(jobs: &[Job]) -> u64 {
    jobs.iter().map(|job| job.finish).max().unwrap_or(0)
}

/// Per-server idle time and utilization over the total span. A zero span
/// (every job had zero duration at epoch 0) reports 0% utilization.
pub fn server_usage(busy_times: &[u64], span: u64) -> Vec<ServerUsage> {
    busy_times
        .iter()
        .enumerate()
        .map(|(idx, &busy)| {
            let utilization_pct = if span == 0 {
                0.0
            } else {
                round_to(busy as f64 / span as f64 * 100.0, 2)
            };
            ServerUsage {
                server: idx + 1,
                busy,
                idle: span.saturating_sub(busy),
                utilization_pct,
            }
        })
        .collect()
}

pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
