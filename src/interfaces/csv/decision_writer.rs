use crate::domain::registration::{RegistrationOutcome, RegistrationRequest};
use crate::error::{RegistrationError, Result};
use serde::Serialize;
use std::io::Write;

/// One output row per well-formed request.
///
/// `outcome` is `registered`, `rejected` or `error`. For `error` rows the
/// reason carries the collaborator failure and nothing was saved.
#[derive(Debug, Serialize, PartialEq)]
pub struct DecisionRecord {
    pub email: String,
    pub outcome: &'static str,
    pub reason: Option<String>,
    pub credit_limit: Option<String>,
}

impl DecisionRecord {
    pub fn new(request: &RegistrationRequest, outcome: &RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Registered(user) => Self {
                email: request.email.clone(),
                outcome: "registered",
                reason: None,
                credit_limit: user.credit_limit.map(|limit| limit.to_string()),
            },
            RegistrationOutcome::Rejected(reason) => Self {
                email: request.email.clone(),
                outcome: "rejected",
                reason: Some(reason.to_string()),
                credit_limit: None,
            },
        }
    }

    pub fn failed(request: &RegistrationRequest, error: &RegistrationError) -> Self {
        Self {
            email: request.email.clone(),
            outcome: "error",
            reason: Some(error.to_string()),
            credit_limit: None,
        }
    }
}

/// Writes registration decisions as CSV (`email,outcome,reason,credit_limit`).
pub struct DecisionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, record: &DecisionRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
