use std::fmt;

use serde::Serialize;
use thiserror::Error;

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;

const DEFAULT_FULL_FUNCTION_ANNUAL: f64 = 1092.41;
const DEFAULT_NARROW_CORE_ANNUAL: f64 = 392.41;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("{} price must be a positive number, got {value}", .unit_type.label())]
    NonPositivePrice { unit_type: UnitType, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum UnitType {
    #[serde(rename = "FF")]
    FullFunction,
    #[serde(rename = "NC")]
    NarrowCore,
}

impl UnitType {
    pub const ALL: [UnitType; 2] = [UnitType::FullFunction, UnitType::NarrowCore];

    pub fn code(self) -> &'static str {
        match self {
            UnitType::FullFunction => "FF",
            UnitType::NarrowCore => "NC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitType::FullFunction => "Full Function",
            UnitType::NarrowCore => "Narrow Core",
        }
    }

    /// Accepts the short codes and the long names, ignoring case and the
    /// separator between words.
    pub fn parse(value: &str) -> Option<UnitType> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "ff" | "fullfunction" => Some(UnitType::FullFunction),
            "nc" | "narrowcore" => Some(UnitType::NarrowCore),
            _ => None,
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Annual price per unit for each unit type. Fixed for the duration of a
/// forecast run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingConfig {
    full_function_annual: f64,
    narrow_core_annual: f64,
}

impl PricingConfig {
    pub fn new(full_function_annual: f64, narrow_core_annual: f64) -> Result<Self, PricingError> {
        validate_price(UnitType::FullFunction, full_function_annual)?;
        validate_price(UnitType::NarrowCore, narrow_core_annual)?;
        Ok(Self {
            full_function_annual,
            narrow_core_annual,
        })
    }

    pub fn annual_price_for(&self, unit_type: UnitType) -> f64 {
        match unit_type {
            UnitType::FullFunction => self.full_function_annual,
            UnitType::NarrowCore => self.narrow_core_annual,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            full_function_annual: DEFAULT_FULL_FUNCTION_ANNUAL,
            narrow_core_annual: DEFAULT_NARROW_CORE_ANNUAL,
        }
    }
}

fn validate_price(unit_type: UnitType, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::NonPositivePrice { unit_type, value })
    }
}

/// Revenue per unit per day. Always divides by 365, leap year or not.
pub fn daily_rate(unit_type: UnitType, config: &PricingConfig) -> f64 {
    config.annual_price_for(unit_type) / DAYS_PER_YEAR
}

pub fn monthly_rate(unit_type: UnitType, config: &PricingConfig) -> f64 {
    config.annual_price_for(unit_type) / MONTHS_PER_YEAR
}

pub fn annual_rate(unit_type: UnitType, config: &PricingConfig) -> f64 {
    config.annual_price_for(unit_type)
}
