//! Inbound and outbound adapters for the command-line surface.

pub mod csv;
