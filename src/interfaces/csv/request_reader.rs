use crate::domain::registration::RegistrationRequest;
use crate::error::{RegistrationError, Result};
use std::io::Read;

/// Reads registration requests from a CSV source.
///
/// Expects the header `first_name,last_name,email,date_of_birth,client_id`
/// with dates written as `YYYY-MM-DD`. Fields are trimmed.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an `Err` for that row only; iteration continues.
    pub fn requests(self) -> impl Iterator<Item = Result<RegistrationRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RegistrationError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::ClientId;

    #[test]
    fn test_reader_valid_stream() {
        let data = "first_name, last_name, email, date_of_birth, client_id\n\
                    Jan, Kowalski, jan@kowalski.pl, 1980-01-01, 1\n\
                    Anna, Nowak, anna@nowak.pl, 1990-12-31, 2";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RegistrationRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.last_name, "Nowak");
        assert_eq!(second.client_id, ClientId(2));
    }

    #[test]
    fn test_empty_names_are_read_not_rejected() {
        let data = "first_name, last_name, email, date_of_birth, client_id\n\
                    , Kowalski, jan@kowalski.pl, 1980-01-01, 1";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RegistrationRequest>> = reader.requests().collect();

        assert_eq!(results[0].as_ref().unwrap().first_name, "");
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "first_name, last_name, email, date_of_birth, client_id\n\
                    Jan, Kowalski, jan@kowalski.pl, 01/01/1980, 1\n\
                    Jan, Kowalski, jan@kowalski.pl, 1980-01-01, abc";
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<RegistrationRequest>> = reader.requests().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
    }
}
