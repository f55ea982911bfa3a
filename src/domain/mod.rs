//! Domain layer: value types, business rules and the ports through which the
//! registration workflow reaches its collaborators.

pub mod client;
pub mod credit;
pub mod ports;
pub mod registration;
pub mod user;
pub mod validation;
