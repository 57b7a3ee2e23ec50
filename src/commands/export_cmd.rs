use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::forecast::{forecast_from_plan_file, NO_ACTIVE_INSTALLS_MESSAGE};
use crate::services::forecast_export::write_forecast;

pub fn export_command(cmd: Commands) -> ExitCode {
    if let Commands::Export {
        input,
        output,
        format,
        end_date,
    } = cmd
    {
        let forecast = match forecast_from_plan_file(&input, end_date.as_deref()) {
            Ok(forecast) => forecast,
            Err(e) => {
                eprintln!("Failed to generate forecast: {e}");
                return ExitCode::FAILURE;
            }
        };
        if forecast.run.is_empty() {
            eprintln!("{NO_ACTIVE_INSTALLS_MESSAGE}");
        }

        let file = match File::create(&output) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to create {output}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let mut writer = BufWriter::new(file);
        if let Err(e) = write_forecast(&mut writer, &forecast.run, format) {
            eprintln!("Failed to export forecast: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = writer.into_inner() {
            eprintln!("Failed to export forecast: {}", e.error());
            return ExitCode::FAILURE;
        }

        tracing::info!(output = %output, format = format.extension(), "forecast exported");
        println!(
            "Forecast for {} months written to {output}",
            forecast.run.monthly.len()
        );
    }
    ExitCode::SUCCESS
}
