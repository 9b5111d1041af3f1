use std::io::Write;

use crate::stats::Aggregate;

fn percent(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", decimals, value * 100.0)
}

/// One header per key, then one line per task.
pub fn write_report<W: Write>(out: &mut W, aggregates: &[Aggregate], decimals: usize) -> std::io::Result<()> {
    for agg in aggregates {
        let (method, samples) = (agg.key.method, agg.key.samples);
        writeln!(out, "Method: {method}, Samples: {samples}, Episodes: {}", agg.episodes)?;
        for stat in &agg.tasks {
            writeln!(
                out,
                "Method: {method}, Samples: {samples}, Task {}, Mean: {}, Int: {}",
                stat.task,
                percent(stat.mean, decimals),
                percent(stat.half_width, decimals),
            )?;
        }
    }
    Ok(())
}
