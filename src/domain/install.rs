use chrono::NaiveDate;

use crate::domain::pricing::{PricingConfig, UnitType};

pub const DEFAULT_CUSTOMER_NAME: &str = "Client";

/// `quantity` units of one type, all activated on `install_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallEvent {
    pub install_date: NaiveDate,
    pub quantity: i64,
    pub unit_type: UnitType,
}

/// A row as entered by the user. The date may still be missing and the
/// quantity may be zero; such rows are skipped when forecasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRow {
    pub date: Option<NaiveDate>,
    pub quantity: i64,
    pub unit_type: UnitType,
}

impl InstallRow {
    pub fn to_event(&self) -> Option<InstallEvent> {
        if self.quantity <= 0 {
            return None;
        }
        self.date.map(|install_date| InstallEvent {
            install_date,
            quantity: self.quantity,
            unit_type: self.unit_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallPlan {
    pub customer_name: String,
    pub mcn: Option<String>,
    pub pricing: PricingConfig,
    pub forecast_end: Option<NaiveDate>,
    pub installs: Vec<InstallRow>,
}

impl InstallPlan {
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            mcn: None,
            pricing,
            forecast_end: None,
            installs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    #[test]
    fn rows_without_a_date_or_quantity_have_no_event() {
        let missing_date = InstallRow {
            date: None,
            quantity: 3,
            unit_type: UnitType::FullFunction,
        };
        let zero_quantity = InstallRow {
            date: Some(on_date(2024, 1, 1)),
            quantity: 0,
            unit_type: UnitType::FullFunction,
        };

        assert_eq!(missing_date.to_event(), None);
        assert_eq!(zero_quantity.to_event(), None);
    }

    #[test]
    fn complete_rows_become_events() {
        let row = InstallRow {
            date: Some(on_date(2024, 1, 1)),
            quantity: 4,
            unit_type: UnitType::NarrowCore,
        };

        assert_eq!(
            row.to_event(),
            Some(InstallEvent {
                install_date: on_date(2024, 1, 1),
                quantity: 4,
                unit_type: UnitType::NarrowCore,
            })
        );
    }
}
