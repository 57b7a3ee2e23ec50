use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::breakdown::MonthlyBreakdown;
use crate::domain::calendar::{
    days_between_exclusive, each_month_between, end_of_month, format_month_key,
};
use crate::domain::install::InstallEvent;
use crate::domain::pricing::{daily_rate, PricingConfig};

/// Prorates the revenue of one install over every calendar month between the
/// install date and `forecast_end`.
///
/// The install day itself earns nothing. Months without any active day are
/// left out rather than reported as zero. Returns an empty schedule when
/// `forecast_end` is not after the install date or the quantity is not
/// positive.
pub fn calculate_install_forecast(
    install: &InstallEvent,
    forecast_end: NaiveDate,
    pricing: &PricingConfig,
) -> Vec<MonthlyBreakdown> {
    if forecast_end <= install.install_date || install.quantity <= 0 {
        return Vec::new();
    }

    let rate = daily_rate(install.unit_type, pricing);

    each_month_between(install.install_date, forecast_end)
        .into_iter()
        .filter_map(|month_start| {
            let active_start = month_start.max(install.install_date);
            let active_end = end_of_month(month_start).min(forecast_end);
            if active_end <= active_start {
                return None;
            }

            let active_days = days_between_exclusive(active_start, active_end);
            if active_days <= 0 {
                return None;
            }

            let revenue = active_days as f64 * install.quantity as f64 * rate;
            let month = format_month_key(month_start);
            tracing::debug!(
                month = %month,
                active_days,
                quantity = install.quantity,
                unit_type = %install.unit_type,
                revenue,
                "prorated install month"
            );
            Some(MonthlyBreakdown::for_unit_type(month, install.unit_type, revenue))
        })
        .collect()
}

#[derive(Default)]
struct MonthAccumulator {
    full_function: Vec<f64>,
    narrow_core: Vec<f64>,
}

/// Combines breakdowns from any number of installs into one entry per month,
/// sorted by month.
///
/// Column values are added in sorted order, so the result is bit-for-bit
/// independent of the order of the input. `total` is recomputed from the
/// summed columns.
pub fn merge_monthly_breakdowns(entries: &[MonthlyBreakdown]) -> Vec<MonthlyBreakdown> {
    let mut merged: BTreeMap<&str, MonthAccumulator> = BTreeMap::new();
    for entry in entries {
        let accumulator = merged.entry(entry.month.as_str()).or_default();
        accumulator.full_function.push(entry.full_function);
        accumulator.narrow_core.push(entry.narrow_core);
    }

    merged
        .into_iter()
        .map(|(month, accumulator)| {
            MonthlyBreakdown::from_columns(
                month.to_string(),
                canonical_sum(accumulator.full_function),
                canonical_sum(accumulator.narrow_core),
            )
        })
        .collect()
}

fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |sum, value| sum + value)
}
