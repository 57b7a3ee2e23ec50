use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::install::{InstallPlan, InstallRow, DEFAULT_CUSTOMER_NAME};
use crate::domain::pricing::{PricingConfig, PricingError, UnitType};

#[derive(Error, Debug)]
pub enum InstallPlanYamlError {
    #[error("failed to read install plan {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse install plan yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("customer name is required")]
    MissingCustomerName,
    #[error("invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid unit type in install {row}: {value} (expected FF or NC)")]
    InvalidUnitType { row: usize, value: String },
    #[error("invalid pricing: {0}")]
    InvalidPricing(#[from] PricingError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InstallPlanRecord {
    customer_name: Option<String>,
    mcn: Option<String>,
    pricing: Option<PricingRecord>,
    forecast_end: Option<String>,
    #[serde(default)]
    installs: Vec<InstallRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricingRecord {
    full_function_annual: f64,
    narrow_core_annual: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InstallRecord {
    date: Option<String>,
    #[serde(default = "default_quantity")]
    quantity: i64,
    #[serde(default = "default_unit_type")]
    unit_type: String,
}

fn default_quantity() -> i64 {
    1
}

fn default_unit_type() -> String {
    UnitType::FullFunction.code().to_string()
}

/// Reads an install plan from a YAML file.
///
/// # Errors
/// - Returns an error when the file cannot be read or is not valid YAML.
/// - Returns an error when a date, unit type or price is invalid.
pub fn load_install_plan_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<InstallPlan, InstallPlanYamlError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| InstallPlanYamlError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    deserialize_install_plan_from_yaml_str(&contents)
}

/// Parses an install plan. A missing `pricing` section falls back to
/// [`PricingConfig::default`], a missing customer name to `"Client"`.
pub fn deserialize_install_plan_from_yaml_str(
    input: &str,
) -> Result<InstallPlan, InstallPlanYamlError> {
    let record: InstallPlanRecord = serde_yaml::from_str(input)?;

    let customer_name = match record.customer_name {
        None => DEFAULT_CUSTOMER_NAME.to_string(),
        Some(name) if name.trim().is_empty() => {
            return Err(InstallPlanYamlError::MissingCustomerName);
        }
        Some(name) => name.trim().to_string(),
    };

    let pricing = match record.pricing {
        Some(pricing) => {
            PricingConfig::new(pricing.full_function_annual, pricing.narrow_core_annual)?
        }
        None => PricingConfig::default(),
    };

    let installs = record
        .installs
        .into_iter()
        .enumerate()
        .map(|(index, value)| install_row_from_record(index + 1, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InstallPlan {
        customer_name,
        mcn: record
            .mcn
            .map(|mcn| mcn.trim().to_string())
            .filter(|mcn| !mcn.is_empty()),
        pricing,
        forecast_end: parse_date_opt(record.forecast_end.as_deref())?,
        installs,
    })
}

fn install_row_from_record(
    row: usize,
    value: InstallRecord,
) -> Result<InstallRow, InstallPlanYamlError> {
    let unit_type = UnitType::parse(&value.unit_type).ok_or_else(|| {
        InstallPlanYamlError::InvalidUnitType {
            row,
            value: value.unit_type.clone(),
        }
    })?;
    Ok(InstallRow {
        date: parse_date_opt(value.date.as_deref())?,
        quantity: value.quantity,
        unit_type,
    })
}

/// Blank strings count as "not entered yet".
fn parse_date_opt(value: Option<&str>) -> Result<Option<NaiveDate>, InstallPlanYamlError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, InstallPlanYamlError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| InstallPlanYamlError::InvalidDate(value.to_string()))
}
