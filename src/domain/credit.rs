use super::client::ClientType;
use super::user::CreditLimit;
use rust_decimal::Decimal;

/// How a base credit score turns into a user's credit limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditPolicy {
    /// No credit limit applies; the score is discarded.
    Unlimited,
    /// A credit limit applies, equal to the score times the multiplier.
    Limited { multiplier: u32 },
}

impl CreditPolicy {
    /// Maps a client tier to its policy. Unknown tiers get the standard policy.
    pub fn for_client_type(client_type: &ClientType) -> Self {
        match client_type {
            ClientType::VeryImportant => Self::Unlimited,
            ClientType::Important => Self::Limited { multiplier: 2 },
            ClientType::Standard | ClientType::Unknown(_) => Self::Limited { multiplier: 1 },
        }
    }

    /// Applies the policy to a base score.
    pub fn apply(&self, base_score: i64) -> CreditDecision {
        match self {
            Self::Unlimited => CreditDecision::Unlimited,
            Self::Limited { multiplier } => {
                let value = Decimal::from(base_score) * Decimal::from(*multiplier);
                match CreditLimit::new(value) {
                    Ok(limit) => CreditDecision::Limited(limit),
                    Err(_) => CreditDecision::BelowZero(value),
                }
            }
        }
    }
}

/// The credit limit decided for a user before the minimum-limit gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditDecision {
    Unlimited,
    Limited(CreditLimit),
    /// A limit applies but came out negative; it can never pass the gate.
    BelowZero(Decimal),
}

impl CreditDecision {
    /// The applicable limit value, if any.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Unlimited => None,
            Self::Limited(limit) => Some(limit.value()),
            Self::BelowZero(value) => Some(*value),
        }
    }
}
