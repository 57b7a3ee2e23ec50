use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use revenue_forecasts::commands::base_commands::{CliArgs, Commands};
use revenue_forecasts::commands::export_cmd::export_command;
use revenue_forecasts::commands::forecast_cmd::forecast_command;

fn main() -> ExitCode {
    revenue_forecasts::init_tracing();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::Export { .. } => export_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
