#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const FIXTURE_CLIENTS: &str = "tests/fixtures/clients.csv";
pub const FIXTURE_SCORES: &str = "tests/fixtures/scores.csv";

/// Writes registration requests to a temporary CSV file.
pub fn requests_csv(rows: &[[&str; 5]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["first_name", "last_name", "email", "date_of_birth", "client_id"])?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes `count` valid requests for distinct standard-client users.
pub fn generate_requests(count: usize) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["first_name", "last_name", "email", "date_of_birth", "client_id"])?;
        for i in 1..=count {
            let email = format!("jan{}@kowalski.pl", i);
            wtr.write_record(["Jan", "Kowalski", email.as_str(), "1980-04-12", "1"])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
