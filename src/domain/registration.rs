use super::client::ClientId;
use super::user::User;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// The input of a single registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

impl RegistrationRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client_id: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client_id: ClientId(client_id),
        }
    }
}

/// The business rule that turned a registration down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidName,
    InvalidEmail,
    Underage,
    ClientNotFound,
    CreditLimitTooLow,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidEmail => "invalid_email",
            Self::Underage => "underage",
            Self::ClientNotFound => "client_not_found",
            Self::CreditLimitTooLow => "credit_limit_too_low",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// The user passed every rule and was saved.
    Registered(User),
    Rejected(Rejection),
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Registered(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let csv = "first_name, last_name, email, date_of_birth, client_id\nJan, Kowalski, jan@kowalski.pl, 1990-05-17, 3";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let result: RegistrationRequest = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize request");

        assert_eq!(result.first_name, "Jan");
        assert_eq!(result.client_id, ClientId(3));
        assert_eq!(
            result.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
    }

    #[test]
    fn test_rejection_display_uses_snake_case_label() {
        assert_eq!(Rejection::ClientNotFound.to_string(), "client_not_found");
        assert_eq!(
            Rejection::CreditLimitTooLow.to_string(),
            "credit_limit_too_low"
        );
    }
}
