use crate::domain::breakdown::MonthlyBreakdown;
use crate::domain::pricing::{annual_rate, daily_rate, UnitType};
use crate::services::forecast::PlanForecast;
use crate::services::number_format::format_currency;

pub fn format_forecast_report(forecast: &PlanForecast) -> String {
    let plan = &forecast.plan;
    let run = &forecast.run;

    let mut lines = Vec::new();
    lines.push(format!("{} installs", plan.customer_name));
    lines.push(
        UnitType::ALL
            .iter()
            .map(|unit_type| {
                format!(
                    "{}: ${:.2}/year",
                    unit_type.label(),
                    annual_rate(*unit_type, &plan.pricing)
                )
            })
            .collect::<Vec<_>>()
            .join(" | "),
    );
    lines.push(format!(
        "Rates: FF {:.6} /day, NC {:.6} /day",
        daily_rate(UnitType::FullFunction, &plan.pricing),
        daily_rate(UnitType::NarrowCore, &plan.pricing)
    ));
    if let Some(mcn) = &plan.mcn {
        lines.push(format!("MCN: {mcn}"));
    }
    lines.push(format!("Forecast end: {}", forecast.forecast_end.format("%Y-%m-%d")));
    lines.push(String::new());

    lines.push("Monthly breakdown".to_string());
    if run.monthly.is_empty() {
        lines.push("No forecast yet.".to_string());
    } else {
        lines.extend(format_breakdown_table(&run.monthly));
    }
    lines.push(String::new());
    lines.push(format!("Total revenue: {}", format_currency(run.total_revenue())));
    lines.push(String::new());

    lines.push("Per-install details".to_string());
    if run.per_install.is_empty() {
        lines.push("No installs yet.".to_string());
    }
    for item in &run.per_install {
        lines.push(item.label.clone());
        lines.extend(format_breakdown_table(&item.breakdown));
    }

    lines.join("\n")
}

fn format_breakdown_table(rows: &[MonthlyBreakdown]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push("Month | FF Revenue | NC Revenue | Total".to_string());
    lines.push("------|------------|------------|------".to_string());
    lines.extend(rows.iter().map(|row| {
        format!(
            "{} | {} | {} | {}",
            row.month,
            format_currency(row.full_function),
            format_currency(row.narrow_core),
            format_currency(row.total)
        )
    }));
    lines
}
