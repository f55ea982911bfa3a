use crate::domain::client::Client;
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source)
}

/// Reads the client table (`id,name,type`). Unrecognised types are kept as-is.
pub fn read_clients<R: Read>(source: R) -> Result<Vec<Client>> {
    let clients = reader(source)
        .into_deserialize()
        .collect::<std::result::Result<Vec<Client>, _>>()?;
    Ok(clients)
}

#[derive(Debug, Deserialize)]
struct ScoreRecord {
    last_name: String,
    score: i64,
}

/// Reads the credit score table (`last_name,score`).
pub fn read_scores<R: Read>(source: R) -> Result<Vec<(String, i64)>> {
    let mut scores = Vec::new();
    for record in reader(source).into_deserialize() {
        let ScoreRecord { last_name, score } = record?;
        scores.push((last_name, score));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ClientId, ClientType};
    use crate::error::RegistrationError;

    #[test]
    fn test_read_clients() {
        let data = "id, name, type\n1, Kowalski, NormalClient\n2, Malewski, ImportantClient\n3, Doe, Mystery";
        let clients = read_clients(data.as_bytes()).unwrap();

        assert_eq!(clients.len(), 3);
        assert_eq!(clients[1].id, ClientId(2));
        assert_eq!(clients[1].client_type, ClientType::Important);
        assert_eq!(clients[2].client_type, ClientType::Unknown("Mystery".into()));
    }

    #[test]
    fn test_read_clients_fails_on_bad_id() {
        let data = "id, name, type\nx, Kowalski, NormalClient";
        assert!(matches!(
            read_clients(data.as_bytes()),
            Err(RegistrationError::CsvError(_))
        ));
    }

    #[test]
    fn test_read_scores() {
        let data = "last_name, score\nKowalski, 700\nNowak, -20";
        let scores = read_scores(data.as_bytes()).unwrap();
        assert_eq!(
            scores,
            vec![("Kowalski".to_string(), 700), ("Nowak".to_string(), -20)]
        );
    }
}
