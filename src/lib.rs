//! # User Registration
//!
//! Validates and registers users against a set of business rules: name
//! presence, email shape, minimum age, client existence and credit-limit
//! eligibility. Client lookup, credit scoring and persistence are reached
//! through the ports in [`domain::ports`].
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use user_registration::application::registration::RegistrationService;
//! use user_registration::domain::client::{Client, ClientType};
//! use user_registration::infrastructure::clock::FixedClock;
//! use user_registration::infrastructure::in_memory::{
//!     InMemoryClientDirectory, InMemoryCreditScoring, InMemoryUserStore,
//! };
//!
//! let service = RegistrationService::new(
//!     Box::new(InMemoryClientDirectory::with_clients([Client::new(
//!         1,
//!         "Acme",
//!         ClientType::Important,
//!     )])),
//!     Box::new(InMemoryCreditScoring::new().with_default_score(300)),
//!     Box::new(InMemoryUserStore::new()),
//!     Box::new(FixedClock(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())),
//! );
//!
//! let dob = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
//! assert!(service.add_user("Jan", "Kowalski", "jan@kowalski.pl", dob, 1).unwrap());
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
