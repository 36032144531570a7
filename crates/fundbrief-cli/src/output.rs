use std::io::Write;

use owo_colors::OwoColorize;

use fundbrief_core::{ReportRecord, ResultSet};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

/// Print the chronological metric table (numeric columns only; the
/// narrative fields get their own summary below).
pub fn print_result_table(
    w: &mut dyn Write,
    results: &ResultSet,
    color: ColorMode,
) -> std::io::Result<()> {
    if results.is_empty() {
        writeln!(w, "No report records extracted.")?;
        return Ok(());
    }

    let header = format!(
        "{:<14} {:>10} {:>10} {:>11} {:>12} {:>10}",
        "Period", "AUM ($M)", "Ret 6m %", "Ret 12m %", "Dividend $", "Bench %"
    );
    if color.enabled() {
        writeln!(w, "{}", header.bold())?;
    } else {
        writeln!(w, "{}", header)?;
    }

    for record in results {
        let period = if record.period.trim().is_empty() {
            "(unknown)"
        } else {
            record.period.as_str()
        };
        writeln!(
            w,
            "{:<14} {:>10} {:>10} {:>11} {:>12} {:>10}",
            period,
            fmt_metric(record.aum),
            fmt_metric(record.return_6m),
            fmt_metric(record.return_12m),
            fmt_metric(record.dividend),
            fmt_metric(record.benchmark_return),
        )?;
    }
    writeln!(w)?;
    writeln!(w, "{} records extracted", results.len())?;
    Ok(())
}

fn narrative_flags(record: &ReportRecord) -> String {
    let mut present = Vec::new();
    if !record.summary.is_empty() {
        present.push("summary");
    }
    if !record.future_findings.is_empty() {
        present.push("future findings");
    }
    if !record.investment_plan.is_empty() {
        present.push("investment plan");
    }
    if present.is_empty() {
        "none".to_string()
    } else {
        present.join(", ")
    }
}

/// Print which narrative sections each period carries.
pub fn print_narrative_summary(
    w: &mut dyn Write,
    results: &ResultSet,
    color: ColorMode,
) -> std::io::Result<()> {
    if results.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    for record in results {
        let flags = narrative_flags(record);
        if color.enabled() {
            if flags == "none" {
                writeln!(w, "{:<14} {}", record.period, "no narrative sections".dimmed())?;
            } else {
                writeln!(w, "{:<14} {}", record.period, flags.green())?;
            }
        } else {
            writeln!(w, "{:<14} narrative: {}", record.period, flags)?;
        }
    }
    Ok(())
}
