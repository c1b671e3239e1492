//! Overdue fine calculation

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Whole days elapsed past the scheduled end date. Partial days do not
/// count, and a return on or before the due date is never late.
pub fn days_late(scheduled_end: NaiveDate, evaluated_at: NaiveDate) -> i64 {
    (evaluated_at - scheduled_end).num_days().max(0)
}

/// Default fine for a return evaluated at the given date. The return
/// workflow lets staff override this before finalizing.
pub fn compute_fine(scheduled_end: NaiveDate, evaluated_at: NaiveDate, daily_rate: Decimal) -> Decimal {
    Decimal::from(days_late(scheduled_end, evaluated_at)) * daily_rate
}
