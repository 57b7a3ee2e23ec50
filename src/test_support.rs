use chrono::NaiveDate;

use crate::domain::install::{InstallEvent, InstallPlan, InstallRow};
use crate::domain::pricing::{PricingConfig, UnitType};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_install(install_date: NaiveDate, quantity: i64, unit_type: UnitType) -> InstallEvent {
    InstallEvent {
        install_date,
        quantity,
        unit_type,
    }
}

pub fn build_row(date: Option<NaiveDate>, quantity: i64, unit_type: UnitType) -> InstallRow {
    InstallRow {
        date,
        quantity,
        unit_type,
    }
}

pub fn build_plan(installs: Vec<InstallRow>) -> InstallPlan {
    let mut plan = InstallPlan::new(PricingConfig::default());
    plan.installs = installs;
    plan
}
