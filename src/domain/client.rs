use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a client as known to the client directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The tier of a client, which drives the credit-limit policy.
///
/// Labels that match none of the known tiers are kept as `Unknown` rather than
/// rejected, and are treated like a standard client downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClientType {
    Standard,
    Important,
    VeryImportant,
    Unknown(String),
}

impl ClientType {
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "NormalClient" | "Standard" => Self::Standard,
            "ImportantClient" | "Important" => Self::Important,
            "VeryImportantClient" | "VeryImportant" => Self::VeryImportant,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Standard => "NormalClient",
            Self::Important => "ImportantClient",
            Self::VeryImportant => "VeryImportantClient",
            Self::Unknown(label) => label,
        }
    }
}

impl From<String> for ClientType {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<ClientType> for String {
    fn from(client_type: ClientType) -> Self {
        client_type.label().to_string()
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A client record owned by the client directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: ClientType,
}

impl Client {
    pub fn new(id: u32, name: impl Into<String>, client_type: ClientType) -> Self {
        Self {
            id: ClientId(id),
            name: name.into(),
            client_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_labels() {
        assert_eq!(ClientType::parse("NormalClient"), ClientType::Standard);
        assert_eq!(ClientType::parse("ImportantClient"), ClientType::Important);
        assert_eq!(
            ClientType::parse("VeryImportantClient"),
            ClientType::VeryImportant
        );
        assert_eq!(ClientType::parse(" Important "), ClientType::Important);
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        let client_type = ClientType::parse("PlatinumClient");
        assert_eq!(client_type, ClientType::Unknown("PlatinumClient".into()));
        assert_eq!(client_type.label(), "PlatinumClient");
    }

    #[test]
    fn test_client_serialization_uses_labels() {
        let client = Client::new(7, "Kowalski", ClientType::VeryImportant);
        let json = serde_json::to_string(&client).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Kowalski","type":"VeryImportantClient"}"#);

        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }
}
