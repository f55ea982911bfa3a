use super::client::{Client, ClientId};
use super::user::User;
use crate::error::Result;
use chrono::NaiveDate;

/// Read-only access to the clients a user can be registered against.
pub trait ClientDirectory: Send + Sync {
    fn lookup(&self, client_id: ClientId) -> Result<Option<Client>>;
}

/// An open connection to the credit-scoring service.
///
/// Implementations release whatever they hold (connection, handle) in `Drop`,
/// so a session is released on every path out of the scope that acquired it.
pub trait CreditScoringSession {
    /// Base credit score for a person, keyed by last name and date of birth.
    fn score(&mut self, last_name: &str, date_of_birth: NaiveDate) -> Result<i64>;
}

pub trait CreditScoringService: Send + Sync {
    fn acquire(&self) -> Result<CreditScoringSessionBox<'_>>;
}

/// Registered users, keyed by email compared case-insensitively.
pub trait UserStore: Send + Sync {
    /// Inserts the user, replacing any stored user with the same email.
    fn save(&self, user: User) -> Result<()>;
    /// All stored users, ordered by lowercased email.
    fn all_users(&self) -> Result<Vec<User>>;
}

/// Source of the current date used for age checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type ClientDirectoryBox = Box<dyn ClientDirectory>;
pub type CreditScoringServiceBox = Box<dyn CreditScoringService>;
pub type CreditScoringSessionBox<'a> = Box<dyn CreditScoringSession + 'a>;
pub type UserStoreBox = Box<dyn UserStore>;
pub type ClockBox = Box<dyn Clock>;
