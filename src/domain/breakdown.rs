use serde::{Deserialize, Serialize};

use crate::domain::pricing::UnitType;

/// Revenue attributed to one calendar month. `total` is always
/// `full_function + narrow_core`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    pub month: String,
    pub full_function: f64,
    pub narrow_core: f64,
    pub total: f64,
}

impl MonthlyBreakdown {
    pub fn for_unit_type(month: String, unit_type: UnitType, revenue: f64) -> Self {
        let (full_function, narrow_core) = match unit_type {
            UnitType::FullFunction => (revenue, 0.0),
            UnitType::NarrowCore => (0.0, revenue),
        };
        Self::from_columns(month, full_function, narrow_core)
    }

    pub fn from_columns(month: String, full_function: f64, narrow_core: f64) -> Self {
        Self {
            month,
            full_function,
            narrow_core,
            total: full_function + narrow_core,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabeledBreakdown {
    pub label: String,
    pub breakdown: Vec<MonthlyBreakdown>,
}

/// The result of one forecast action: the merged schedule plus the
/// per-install schedules it was built from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRun {
    pub monthly: Vec<MonthlyBreakdown>,
    pub per_install: Vec<LabeledBreakdown>,
}

impl ForecastRun {
    pub fn total_revenue(&self) -> f64 {
        self.monthly.iter().map(|row| row.total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.per_install.is_empty()
    }
}
