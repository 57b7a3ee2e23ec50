use assert_fs::prelude::*;
use predicates::prelude::*;

const PLAN_YAML: &str = r#"customer_name: Meijer
mcn: "7781"
pricing:
  full_function_annual: 365
  narrow_core_annual: 730
forecast_end: 2024-03-31
installs:
  - date: 2024-01-15
    quantity: 2
    unit_type: FF
  - date: ""
    quantity: 4
    unit_type: NC
  - date: 2024-02-10
    quantity: 1
    unit_type: NC
"#;

#[test]
fn forecast_prints_merged_and_per_install_tables() {
    let plan = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    plan.write_str(PLAN_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("revenue-forecasts");
    cmd.args(["forecast", "-i", plan.path().to_str().unwrap()]);

    // FF: 2 units at $1/day; NC: 1 unit at $2/day.
    // Jan 16 days, Feb 28 days (NC from Feb 10: 19 days), Mar 30 days.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Meijer installs"))
        .stdout(predicate::str::contains("MCN: 7781"))
        .stdout(predicate::str::contains("Rates: FF 1.000000 /day, NC 2.000000 /day"))
        .stdout(predicate::str::contains("2024-01 | $32.00 | $0.00 | $32.00"))
        .stdout(predicate::str::contains("2024-02 | $56.00 | $38.00 | $94.00"))
        .stdout(predicate::str::contains("2024-03 | $60.00 | $60.00 | $120.00"))
        .stdout(predicate::str::contains("Total revenue: $246.00"))
        .stdout(predicate::str::contains("Install 1 (FF, qty 2)"))
        .stdout(predicate::str::contains("Install 3 (NC, qty 1)"))
        .stdout(predicate::str::contains("Install 2").not());
}

#[test]
fn forecast_end_date_argument_overrides_the_plan() {
    let plan = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    plan.write_str(PLAN_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("revenue-forecasts");
    cmd.args([
        "forecast",
        "-i",
        plan.path().to_str().unwrap(),
        "-e",
        "2024-01-31",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Forecast end: 2024-01-31"))
        .stdout(predicate::str::contains("2024-01 | $32.00 | $0.00 | $32.00"))
        .stdout(predicate::str::contains("2024-02").not())
        .stderr(predicate::str::contains("Add at least one install").not());
}

#[test]
fn forecast_without_active_installs_reports_an_empty_forecast() {
    let plan = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    plan.write_str("forecast_end: 2024-01-01\ninstalls:\n  - date: 2024-06-01\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("revenue-forecasts");
    cmd.args(["forecast", "-i", plan.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No forecast yet."))
        .stdout(predicate::str::contains("No installs yet."))
        .stderr(predicate::str::contains(
            "Add at least one install with a date, quantity, and end date after the install.",
        ));
}

#[test]
fn forecast_fails_without_an_end_date() {
    let plan = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    plan.write_str("installs:\n  - date: 2024-06-01\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("revenue-forecasts");
    cmd.args(["forecast", "-i", plan.path().to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("please choose a forecast end date"));
}

#[test]
fn forecast_fails_on_invalid_pricing() {
    let plan = assert_fs::NamedTempFile::new("plan.yaml").unwrap();
    plan.write_str(
        "pricing:\n  full_function_annual: -5\n  narrow_core_annual: 392.41\nforecast_end: 2024-06-01\n",
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("revenue-forecasts");
    cmd.args(["forecast", "-i", plan.path().to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Full Function price must be a positive number"));
}
