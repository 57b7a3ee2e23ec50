use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::breakdown::{ForecastRun, LabeledBreakdown, MonthlyBreakdown};
use crate::domain::install::{InstallPlan, InstallRow};
use crate::services::forecast_engine::{calculate_install_forecast, merge_monthly_breakdowns};
use crate::services::install_plan_yaml::{
    load_install_plan_from_yaml_file, parse_date, InstallPlanYamlError,
};

pub const NO_ACTIVE_INSTALLS_MESSAGE: &str =
    "Add at least one install with a date, quantity, and end date after the install.";

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error(transparent)]
    InstallPlan(#[from] InstallPlanYamlError),
    #[error("please choose a forecast end date")]
    MissingForecastEnd,
}

/// A loaded plan together with the forecast computed from it.
#[derive(Debug, Clone)]
pub struct PlanForecast {
    pub plan: InstallPlan,
    pub forecast_end: NaiveDate,
    pub run: ForecastRun,
}

pub fn forecast_from_plan_file(
    plan_path: &str,
    end_date_override: Option<&str>,
) -> Result<PlanForecast, ForecastError> {
    let plan = load_install_plan_from_yaml_file(plan_path)?;
    let end_date_override = end_date_override.map(parse_date).transpose()?;
    let forecast_end = resolve_forecast_end(&plan, end_date_override)?;
    let run = run_forecast(&plan, forecast_end);
    Ok(PlanForecast {
        plan,
        forecast_end,
        run,
    })
}

/// A command-line end date wins over the one stored in the plan.
pub fn resolve_forecast_end(
    plan: &InstallPlan,
    end_date_override: Option<NaiveDate>,
) -> Result<NaiveDate, ForecastError> {
    end_date_override
        .or(plan.forecast_end)
        .ok_or(ForecastError::MissingForecastEnd)
}

/// Forecasts every usable row of `plan` and merges the results.
///
/// Rows without a date or with a non-positive quantity are skipped, as are
/// rows that produce no revenue before `forecast_end`. Labels keep the row's
/// position in the plan, so skipped rows leave gaps in the numbering.
pub fn run_forecast(plan: &InstallPlan, forecast_end: NaiveDate) -> ForecastRun {
    let mut all_breakdowns: Vec<MonthlyBreakdown> = Vec::new();
    let mut per_install = Vec::new();

    for (index, row) in plan.installs.iter().enumerate() {
        let Some(install) = row.to_event() else {
            tracing::warn!(position = index + 1, ?row, "skipping incomplete install row");
            continue;
        };
        let breakdown = calculate_install_forecast(&install, forecast_end, &plan.pricing);
        if breakdown.is_empty() {
            tracing::warn!(
                position = index + 1,
                install_date = %install.install_date,
                %forecast_end,
                "install has no revenue before the forecast end"
            );
            continue;
        }
        all_breakdowns.extend(breakdown.iter().cloned());
        per_install.push(LabeledBreakdown {
            label: install_label(index, row),
            breakdown,
        });
    }

    let monthly = merge_monthly_breakdowns(&all_breakdowns);
    tracing::info!(
        customer = %plan.customer_name,
        installs = per_install.len(),
        months = monthly.len(),
        %forecast_end,
        "forecast generated"
    );

    ForecastRun {
        monthly,
        per_install,
    }
}

fn install_label(index: usize, row: &InstallRow) -> String {
    format!(
        "Install {} ({}, qty {})",
        index + 1,
        row.unit_type.code(),
        row.quantity
    )
}
