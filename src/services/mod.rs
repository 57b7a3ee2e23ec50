pub mod forecast;
pub mod forecast_engine;
pub mod forecast_export;
pub mod install_plan_yaml;
pub mod number_format;
