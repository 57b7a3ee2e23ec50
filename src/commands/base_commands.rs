use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::forecast_export::ExportFormat;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast monthly revenue for an install plan and print a report
    Forecast {
        /// Install plan YAML file
        #[arg(short, long)]
        input: String,
        /// Forecast end date (YYYY-MM-DD), overrides the plan's forecast_end
        #[arg(short, long)]
        end_date: Option<String>,
    },
    /// Forecast monthly revenue for an install plan and export it to a file
    Export {
        /// Install plan YAML file
        #[arg(short, long)]
        input: String,
        /// Output file
        #[arg(short, long)]
        output: String,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Forecast end date (YYYY-MM-DD), overrides the plan's forecast_end
        #[arg(short, long)]
        end_date: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_defaults_to_csv() {
        let args = CliArgs::parse_from([
            "revenue-forecasts",
            "export",
            "-i",
            "plan.yaml",
            "-o",
            "forecast.csv",
        ]);

        if let Commands::Export {
            format, end_date, ..
        } = args.command
        {
            assert_eq!(format, ExportFormat::Csv);
            assert_eq!(end_date, None);
        } else {
            panic!("expected export command");
        }
    }

    #[test]
    fn forecast_accepts_an_end_date_override() {
        let args = CliArgs::parse_from([
            "revenue-forecasts",
            "forecast",
            "-i",
            "plan.yaml",
            "-e",
            "2024-12-31",
        ]);

        if let Commands::Forecast { input, end_date } = args.command {
            assert_eq!(input, "plan.yaml");
            assert_eq!(end_date.as_deref(), Some("2024-12-31"));
        } else {
            panic!("expected forecast command");
        }
    }

    #[test]
    fn export_rejects_unknown_formats() {
        let result = CliArgs::try_parse_from([
            "revenue-forecasts",
            "export",
            "-i",
            "plan.yaml",
            "-o",
            "forecast.xml",
            "-f",
            "xml",
        ]);
        assert!(result.is_err());
    }
}
