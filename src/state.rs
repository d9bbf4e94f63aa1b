use serde::Serialize;

/// One completed job. Times are integer simulation ticks.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Job {
    pub id: usize,
    pub server: usize,
    pub arrival: u64,
    pub service: u64,
    pub start: u64,
    pub finish: u64,
    pub turnaround: u64,
    pub wait: u64,
    pub response: u64,
}

/// Sum and mean for one timing metric across all jobs.
#[derive(Clone, Debug, Serialize)]
pub struct MetricRow {
    pub sum: u64,
    pub mean: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Totals {
    pub service: MetricRow,
    pub turnaround: MetricRow,
    pub wait: MetricRow,
    pub response: MetricRow,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServerUsage {
    pub server: usize,
    pub busy: u64,
    pub idle: u64,
    pub utilization_pct: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunMetadata {
    pub service: String,
    pub servers: usize,
    pub seed: Option<u64>,
    pub span: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub jobs: Vec<Job>,
    pub totals: Totals,
    pub usage: Vec<ServerUsage>,
    pub metadata: RunMetadata,
}
