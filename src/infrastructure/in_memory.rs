use crate::domain::client::{Client, ClientId};
use crate::domain::ports::{
    ClientDirectory, CreditScoringService, CreditScoringSession, CreditScoringSessionBox,
    UserStore,
};
use crate::domain::user::User;
use crate::error::{RegistrationError, Result};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

fn poisoned<T>(_: PoisonError<T>) -> RegistrationError {
    RegistrationError::InternalError(Box::new(std::io::Error::other(
        "In-memory store lock poisoned",
    )))
}

/// A thread-safe in-memory client directory.
///
/// Clones share the same underlying map, so a test can keep a handle while the
/// service owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryClientDirectory {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryClientDirectory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the given clients.
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let map = clients.into_iter().map(|c| (c.id, c)).collect();
        Self {
            clients: Arc::new(RwLock::new(map)),
            lookups: Arc::default(),
        }
    }

    pub fn insert(&self, client: Client) -> Result<()> {
        let mut clients = self.clients.write().map_err(poisoned)?;
        clients.insert(client.id, client);
        Ok(())
    }

    /// Number of lookups served so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ClientDirectory for InMemoryClientDirectory {
    fn lookup(&self, client_id: ClientId) -> Result<Option<Client>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let clients = self.clients.read().map_err(poisoned)?;
        Ok(clients.get(&client_id).cloned())
    }
}

/// An in-memory credit-scoring service backed by a table of scores per last name.
///
/// Tracks how many sessions are currently open so callers can check that every
/// acquired session was released.
#[derive(Default, Clone)]
pub struct InMemoryCreditScoring {
    scores: Arc<HashMap<String, i64>>,
    default_score: Option<i64>,
    open_sessions: Arc<AtomicUsize>,
    acquired: Arc<AtomicUsize>,
}

impl InMemoryCreditScoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            scores: Arc::new(scores.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Score returned for last names missing from the table.
    pub fn with_default_score(mut self, score: i64) -> Self {
        self.default_score = Some(score);
        self
    }

    pub fn open_sessions(&self) -> usize {
        self.open_sessions.load(Ordering::SeqCst)
    }

    pub fn sessions_acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }
}

impl CreditScoringService for InMemoryCreditScoring {
    fn acquire(&self) -> Result<CreditScoringSessionBox<'_>> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemoryCreditSession { service: self }))
    }
}

/// A session handed out by [`InMemoryCreditScoring`]; released on drop.
pub struct InMemoryCreditSession<'a> {
    service: &'a InMemoryCreditScoring,
}

impl CreditScoringSession for InMemoryCreditSession<'_> {
    fn score(&mut self, last_name: &str, _date_of_birth: NaiveDate) -> Result<i64> {
        self.service
            .scores
            .get(last_name)
            .copied()
            .or(self.service.default_score)
            .ok_or_else(|| RegistrationError::CreditScoreUnavailable {
                last_name: last_name.to_string(),
            })
    }
}

impl Drop for InMemoryCreditSession<'_> {
    fn drop(&mut self) {
        self.service.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A thread-safe in-memory user store keyed by lowercased email.
///
/// Saving an email that is already stored replaces the earlier user, and
/// `all_users` returns users ordered by key, matching the RocksDB store.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn save(&self, user: User) -> Result<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.email.to_lowercase(), user);
        Ok(())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientType;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
    }

    #[test]
    fn test_in_memory_client_directory() {
        let directory =
            InMemoryClientDirectory::with_clients([Client::new(1, "Acme", ClientType::Standard)]);
        directory
            .insert(Client::new(2, "Globex", ClientType::Important))
            .unwrap();

        let retrieved = directory.lookup(ClientId(2)).unwrap().unwrap();
        assert_eq!(retrieved.client_type, ClientType::Important);
        assert!(directory.lookup(ClientId(3)).unwrap().is_none());
        assert_eq!(directory.lookup_count(), 2);
    }

    #[test]
    fn test_credit_session_released_on_drop() {
        let scoring = InMemoryCreditScoring::with_scores([("Kowalski".to_string(), 700)]);
        {
            let mut session = scoring.acquire().unwrap();
            assert_eq!(scoring.open_sessions(), 1);
            assert_eq!(session.score("Kowalski", dob()).unwrap(), 700);
        }
        assert_eq!(scoring.open_sessions(), 0);
        assert_eq!(scoring.sessions_acquired(), 1);
    }

    #[test]
    fn test_credit_score_unavailable_without_default() {
        let scoring = InMemoryCreditScoring::new();
        let mut session = scoring.acquire().unwrap();
        let result = session.score("Nowak", dob());
        assert!(matches!(
            result,
            Err(RegistrationError::CreditScoreUnavailable { last_name }) if last_name == "Nowak"
        ));
    }

    #[test]
    fn test_credit_default_score() {
        let scoring = InMemoryCreditScoring::new().with_default_score(450);
        let mut session = scoring.acquire().unwrap();
        assert_eq!(session.score("Anyone", dob()).unwrap(), 450);
    }

    #[test]
    fn test_in_memory_user_store() {
        let store = InMemoryUserStore::new();
        let client = Client::new(1, "Acme", ClientType::Standard);
        let user = User::new("Jan", "Kowalski", "jan@kowalski.pl", dob(), client);

        store.save(user.clone()).unwrap();
        let all = store.all_users().unwrap();
        assert_eq!(all, vec![user]);
    }

    #[test]
    fn test_in_memory_user_store_overwrites_same_email() {
        let store = InMemoryUserStore::new();
        let first = User::new(
            "Jan",
            "Kowalski",
            "jan@kowalski.pl",
            dob(),
            Client::new(1, "Acme", ClientType::Standard),
        );
        let second = User::new(
            "Janusz",
            "Kowalski",
            "JAN@Kowalski.pl",
            dob(),
            Client::new(2, "Globex", ClientType::Important),
        );
        let other = User::new(
            "Adam",
            "Malewski",
            "adam@malewski.pl",
            dob(),
            Client::new(1, "Acme", ClientType::Standard),
        );

        store.save(first).unwrap();
        store.save(other.clone()).unwrap();
        store.save(second.clone()).unwrap();

        assert_eq!(store.all_users().unwrap(), vec![other, second]);
    }
}
