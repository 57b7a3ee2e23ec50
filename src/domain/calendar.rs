use chrono::{Datelike, Days, Months, NaiveDate};

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// `YYYY-MM`, which sorts lexicographically in calendar order.
pub fn format_month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Returns the first day of every month from `start`'s month through `end`'s
/// month, inclusive. Empty when `start`'s month is after `end`'s month.
pub fn each_month_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut current = start_of_month(start);
    let last = start_of_month(end);

    while current <= last {
        months.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }

    months
}

/// Whole days after `start` up to and including `end`. The start day is not
/// counted and the result is never negative.
///
/// Both arguments are date-only values, so no time-of-day or daylight-saving
/// offset can leak into the count.
pub fn days_between_exclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days().max(0)
}
