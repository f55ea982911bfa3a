//! Application layer orchestrating the registration workflow.
//!
//! This module defines the `RegistrationService`, the single entry point that
//! validates a request, consults the client directory and the credit-scoring
//! service, and hands accepted users to the user store.

pub mod registration;
