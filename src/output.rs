use crate::state::SimulationResult;

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

/// Per-job table plus the aggregate and per-server rows.
pub struct HumanFormatter;

/// Aggregate and per-server rows only.
pub struct SummaryFormatter;

pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = metadata_block(result);
        out.push_str("Jobs:\n");
        for job in &result.jobs {
            out.push_str(&format!(
                "job {} -> server {} | arrival {} service {} start {} finish {} wait {} turnaround {} response {}\n",
                job.id,
                job.server,
                job.arrival,
                job.service,
                job.start,
                job.finish,
                job.wait,
                job.turnaround,
                job.response
            ));
        }
        out.push_str(&summary_block(result));
        out
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = metadata_block(result);
        out.push_str(&summary_block(result));
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = serde_json::to_string_pretty(result).unwrap_or_default();
        out.push('\n');
        out
    }
}

fn metadata_block(result: &SimulationResult) -> String {
    let seed = match result.metadata.seed {
        Some(seed) => seed.to_string(),
        None => "none".to_string(),
    };
    format!(
        "Metadata:\nservice: {}\nservers: {}\nseed: {}\nspan: {}\n",
        result.metadata.service, result.metadata.servers, seed, result.metadata.span
    )
}

fn summary_block(result: &SimulationResult) -> String {
    let mut out = String::from("Totals:\n");
    let rows = [
        ("service", &result.totals.service),
        ("turnaround", &result.totals.turnaround),
        ("wait", &result.totals.wait),
        ("response", &result.totals.response),
    ];
    for (name, row) in rows {
        out.push_str(&format!(
            "{}: sum {} mean {:.2}\n",
            name, row.sum, row.mean
        ));
    }
    out.push_str("Servers:\n");
    for usage in &result.usage {
        out.push_str(&format!(
            "server {}: busy {} idle {} utilization {:.2}%\n",
            usage.server, usage.busy, usage.idle, usage.utilization_pct
        ));
    }
    out
}
