pub mod breakdown;
pub mod calendar;
pub mod install;
pub mod pricing;
