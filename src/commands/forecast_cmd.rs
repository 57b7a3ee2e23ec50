use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_forecast_report;
use crate::services::forecast::{forecast_from_plan_file, NO_ACTIVE_INSTALLS_MESSAGE};

pub fn forecast_command(cmd: Commands) -> ExitCode {
    if let Commands::Forecast { input, end_date } = cmd {
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
        println!("{}", format_forecast_report(&forecast));
    }
    ExitCode::SUCCESS
}
