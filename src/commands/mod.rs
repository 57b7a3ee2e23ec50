pub mod base_commands;
pub mod export_cmd;
pub mod forecast_cmd;
pub mod report_format;
