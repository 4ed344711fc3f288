//! Prometheus text exposition encoder (version 0.0.4 subset).
//!
//! Renders a full engine snapshot as blank-line-separated family blocks in a
//! fixed order. Each family writer produces one block: exactly one HELP
//! line, one TYPE line, then sample lines. `render` composes the blocks and
//! terminates the document with a single trailing newline.

use std::fmt::Write;

use crate::sim::{LatencyHistogram, RequestCounters, SimEngine};

/// Render the full exposition document for one scrape.
///
/// Takes `&mut` because gauge reads draw noise from the engine's RNG; no
/// counter or histogram state is touched.
pub fn render(engine: &mut SimEngine) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(8);

    blocks.push(http_requests_block(engine.counters()));
    blocks.push(process_cpu_seconds_block(engine.elapsed_secs()));
    blocks.push(cpu_usage_block(engine.cpu_usage_percent()));
    blocks.push(resident_memory_block(engine.resident_memory_bytes()));
    blocks.push(queue_depth_block(engine.queue_depth()));
    blocks.push(active_connections_block(engine.active_connections()));
    blocks.push(latency_histogram_block(engine.latency()));
    if !engine.synthetic().is_empty() {
        let values = engine.synthetic_values();
        blocks.push(synthetic_gauges_block(&values));
    }

    // Every block already ends with "\n"; joining on "\n" leaves exactly one
    // blank line between blocks and a single trailing newline at the end.
    blocks.join("\n")
}

fn http_requests_block(counters: &RequestCounters) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP http_requests_total Total number of HTTP requests");
    let _ = writeln!(out, "# TYPE http_requests_total counter");
    for (method, code, total) in counters.samples() {
        let _ = writeln!(
            out,
            "http_requests_total{{method=\"{method}\",code=\"{code}\"}} {total}"
        );
    }
    out
}

fn process_cpu_seconds_block(elapsed: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP process_cpu_seconds_total Total CPU time spent");
    let _ = writeln!(out, "# TYPE process_cpu_seconds_total counter");
    let _ = writeln!(out, "process_cpu_seconds_total {elapsed:.2}");
    out
}

fn cpu_usage_block(percent: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP node_cpu_usage_percent Current CPU usage percentage");
    let _ = writeln!(out, "# TYPE node_cpu_usage_percent gauge");
    let _ = writeln!(out, "node_cpu_usage_percent {percent:.2}");
    out
}

fn resident_memory_block(bytes: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP process_resident_memory_bytes Resident memory size in bytes");
    let _ = writeln!(out, "# TYPE process_resident_memory_bytes gauge");
    let _ = writeln!(out, "process_resident_memory_bytes {bytes}");
    out
}

fn queue_depth_block(depth: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP queue_depth Current queue depth");
    let _ = writeln!(out, "# TYPE queue_depth gauge");
    let _ = writeln!(out, "queue_depth {depth}");
    out
}

fn active_connections_block(conns: i64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP active_connections Number of active connections");
    let _ = writeln!(out, "# TYPE active_connections gauge");
    let _ = writeln!(out, "active_connections {conns}");
    out
}

fn latency_histogram_block(hist: &LatencyHistogram) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP http_request_duration_seconds HTTP request latency");
    let _ = writeln!(out, "# TYPE http_request_duration_seconds histogram");
    // Stored per-bound counts are already cumulative; print them verbatim.
    for (bound, count) in hist.finite_counts() {
        let _ = writeln!(
            out,
            "http_request_duration_seconds_bucket{{le=\"{bound}\"}} {count}"
        );
    }
    let _ = writeln!(
        out,
        "http_request_duration_seconds_bucket{{le=\"+Inf\"}} {}",
        hist.inf_count()
    );
    let _ = writeln!(out, "http_request_duration_seconds_sum {:.6}", hist.sum());
    let _ = writeln!(out, "http_request_duration_seconds_count {}", hist.total_count());
    out
}

fn synthetic_gauges_block(values: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# HELP synthetic_gauge_value Synthetic gauge metrics for testing");
    let _ = writeln!(out, "# TYPE synthetic_gauge_value gauge");
    for (i, v) in values.iter().enumerate() {
        let _ = writeln!(
            out,
            "synthetic_gauge_value{{instance=\"{i}\",job=\"mock\"}} {v:.2}"
        );
    }
    out
}
