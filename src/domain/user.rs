use super::client::Client;
use crate::error::RegistrationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A credit limit granted to a user.
///
/// Wraps `rust_decimal::Decimal` and guarantees the value is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct CreditLimit(Decimal);

impl CreditLimit {
    pub fn new(value: Decimal) -> Result<Self, RegistrationError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(RegistrationError::ValidationError(format!(
                "Credit limit must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for CreditLimit {
    type Error = RegistrationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CreditLimit> for Decimal {
    fn from(limit: CreditLimit) -> Self {
        limit.0
    }
}

impl fmt::Display for CreditLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A user being registered against a client.
///
/// `credit_limit` is `None` when no credit limit applies to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub credit_limit: Option<CreditLimit>,
}

impl User {
    /// Creates a user with no credit limit decided yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client: Client,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client,
            credit_limit: None,
        }
    }

    pub fn has_credit_limit(&self) -> bool {
        self.credit_limit.is_some()
    }
}
