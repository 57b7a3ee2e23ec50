use std::io::{self, Write};

use clap::ValueEnum;
use thiserror::Error;

use crate::domain::breakdown::{ForecastRun, MonthlyBreakdown};

pub const CSV_HEADER: [&str; 4] = ["Month", "FF Revenue", "NC Revenue", "Total"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Merged schedule as CSV: a header line, then one line per month with every
/// amount fixed to two decimals. Lines are separated by `\n` with no trailing
/// newline.
pub fn forecast_to_csv(monthly: &[MonthlyBreakdown]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in monthly {
        writer.write_record([
            row.month.clone(),
            format!("{:.2}", row.full_function),
            format!("{:.2}", row.narrow_core),
            format!("{:.2}", row.total),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let mut csv = String::from_utf8(bytes)
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}

/// Both the merged schedule and every labeled per-install schedule, as
/// pretty-printed JSON.
pub fn forecast_to_json(run: &ForecastRun) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(run)?)
}

pub fn write_forecast<W: Write>(
    writer: &mut W,
    run: &ForecastRun,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let contents = match format {
        ExportFormat::Csv => forecast_to_csv(&run.monthly)?,
        ExportFormat::Json => forecast_to_json(run)?,
    };
    writer.write_all(contents.as_bytes())?;
    Ok(())
}
