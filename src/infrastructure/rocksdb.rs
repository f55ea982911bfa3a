use crate::domain::client::{Client, ClientId};
use crate::domain::ports::{ClientDirectory, UserStore};
use crate::domain::user::User;
use crate::error::{RegistrationError, Result};
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing clients.
pub const CF_CLIENTS: &str = "clients";
/// Column Family for storing registered users.
pub const CF_USERS: &str = "users";

/// A persistent store implementation using RocksDB.
///
/// Serves as both the client directory and the user store, keeping each in its
/// own Column Family. Clients are keyed by their big-endian id, users by their
/// lowercased email address, so registering the same email twice overwrites.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("clients" and "users") exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_clients = ColumnFamilyDescriptor::new(CF_CLIENTS, Options::default());
        let cf_users = ColumnFamilyDescriptor::new(CF_USERS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_clients, cf_users])?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Adds or replaces a client in the directory.
    pub fn put_client(&self, client: &Client) -> Result<()> {
        self.put(CF_CLIENTS, client.id.0.to_be_bytes(), client)
    }

    fn put<K: AsRef<[u8]>, V: Serialize>(&self, cf_name: &str, key: K, value: &V) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let bytes = serde_json::to_vec(value).map_err(|e| {
            RegistrationError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        self.db.put_cf(cf, key, bytes)?;
        Ok(())
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            RegistrationError::InternalError(Box::new(std::io::Error::other(format!(
                "{} column family not found",
                name
            ))))
        })
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        RegistrationError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

impl ClientDirectory for RocksDBStore {
    fn lookup(&self, client_id: ClientId) -> Result<Option<Client>> {
        let cf = self.cf(CF_CLIENTS)?;
        match self.db.get_cf(cf, client_id.0.to_be_bytes())? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }
}

impl UserStore for RocksDBStore {
    fn save(&self, user: User) -> Result<()> {
        let key = user.email.to_lowercase();
        self.put(CF_USERS, key.as_bytes(), &user)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let cf = self.cf(CF_USERS)?;

        let mut users = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item.map_err(|e| {
                RegistrationError::InternalError(Box::new(std::io::Error::other(format!(
                    "RocksDB iteration error: {}",
                    e
                ))))
            })?;
            users.push(decode(&value)?);
        }

        Ok(users)
    }
}
