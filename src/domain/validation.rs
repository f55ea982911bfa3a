use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Thresholds applied by the registration workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Minimum age in full years on the day of registration.
    pub minimum_age: u32,
    /// Applicable credit limits strictly below this value are rejected.
    pub minimum_credit_limit: Decimal,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            minimum_age: 21,
            minimum_credit_limit: dec!(500),
        }
    }
}

pub fn is_valid_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Age in full years on `today`.
///
/// A year is only counted once the birthday has occurred in `today`'s year, so
/// someone born on Feb 29 turns a year older on Mar 1 in non-leap years.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn is_old_enough(date_of_birth: NaiveDate, today: NaiveDate, minimum_age: u32) -> bool {
    i64::from(age_on(date_of_birth, today)) >= i64::from(minimum_age)
}
