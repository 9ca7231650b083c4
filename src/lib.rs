//! # Transaction Risk Scorer
//!
//! A deterministic, batch risk-scoring engine for consumer banking
//! transaction histories.
//!
//! ## Features
//!
//! - **Pure batch transform**: one user's transaction history in, one
//!   annotated history plus a summary out — no I/O, no shared state
//! - **Rule-based scoring**: statistical amount analysis, velocity checks,
//!   time patterns, location/device/IP anomalies, status and account checks
//! - **Explicit configuration**: every weight, threshold, and watch list is
//!   data on [`ScorerConfig`], not a hidden constant
//! - **Serializable output**: scored batches are plain data the caller can
//!   persist and replay without re-invoking the scorer
//!
//! ## Usage
//!
//! ```
//! use chrono::Utc;
//! use transaction_risk_scorer::{RiskScorer, Transaction, TransactionStatus, UserProfile};
//!
//! let scorer = RiskScorer::new();
//! let transactions = vec![Transaction {
//!     id: "TXN-001".to_string(),
//!     amount: 1200.0,
//!     timestamp: Utc::now(),
//!     transaction_type: "DEBIT".to_string(),
//!     status: TransactionStatus::Completed,
//!     location: None,
//!     device: None,
//!     ip_address: None,
//!     ip_country: None,
//!     recipient_id: None,
//!     description: None,
//! }];
//! let batch = scorer
//!     .score_batch(&transactions, &UserProfile::default(), Utc::now())
//!     .unwrap();
//! assert_eq!(batch.transactions.len(), 1);
//! ```

pub mod baseline;
pub mod scorer;
pub mod stats;

pub use baseline::BatchBaseline;
pub use scorer::{
    RiskCategory, RiskFlag, RiskScorer, RuleWeights, ScoredBatch, ScoredTransaction, ScorerConfig,
};
pub use stats::TransactionStats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scoring errors
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ScoreError {
    #[error("invalid amount {amount} on transaction {id}")]
    InvalidAmount { id: String, amount: f64 },

    #[error("invalid scorer configuration: {0}")]
    Config(String),
}

/// Transaction lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    #[serde(untagged)]
    Other(String),
}

/// Transaction location, as delivered by the backend: either a plain
/// display string or a structured place record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Location {
    Place(NamedPlace),
    Raw(String),
}

/// Structured location record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Location {
    /// Normalize both representations to one comparable display key.
    ///
    /// Preference order: city + country, country only, city only,
    /// coordinates, then the raw string as-is.
    pub fn display_key(&self) -> String {
        match self {
            Location::Raw(value) => value.clone(),
            Location::Place(place) => match (&place.city, &place.country) {
                (Some(city), Some(country)) => format!("{}, {}", city, country),
                (None, Some(country)) => country.clone(),
                (Some(city), None) => city.clone(),
                (None, None) => match (place.latitude, place.longitude) {
                    (Some(lat), Some(lon)) => format!("{},{}", lat, lon),
                    _ => "unknown".to_string(),
                },
            },
        }
    }
}

/// Originating IP, as delivered by the backend: either a plain address
/// string or a structured record carrying address and country details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IpAddress {
    Details(IpDetails),
    Raw(String),
}

/// Structured IP record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IpDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl IpAddress {
    /// Normalized address string: the explicit address field when present,
    /// otherwise the JSON serialization of the whole record.
    pub fn address(&self) -> Option<String> {
        match self {
            IpAddress::Raw(value) => Some(value.clone()),
            IpAddress::Details(details) => match &details.address {
                Some(address) => Some(address.clone()),
                None => serde_json::to_string(details).ok(),
            },
        }
    }

    /// Country carried inside a structured record, if any.
    pub fn country(&self) -> Option<&str> {
        match self {
            IpAddress::Details(details) => details.country.as_deref(),
            IpAddress::Raw(_) => None,
        }
    }
}

/// A single transaction from a user's history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    /// Open categorical set (CREDIT, DEBIT, TRANSFER, ...), opaque to
    /// the scoring rules.
    pub transaction_type: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// IP country for mismatch checks: the top-level field wins, falling
    /// back to the country inside a structured IP record.
    pub fn resolved_ip_country(&self) -> Option<&str> {
        self.ip_country
            .as_deref()
            .or_else(|| self.ip_address.as_ref().and_then(|ip| ip.country()))
    }
}

/// Read-only profile context for the user whose batch is being scored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Home country for foreign-IP comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Current account balance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// Account creation time, for account-age checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display_key_preference_order() {
        let full = Location::Place(NamedPlace {
            city: Some("Mumbai".to_string()),
            country: Some("IN".to_string()),
            latitude: Some(19.076),
            longitude: Some(72.8777),
        });
        assert_eq!(full.display_key(), "Mumbai, IN");

        let country_only = Location::Place(NamedPlace {
            country: Some("IN".to_string()),
            ..Default::default()
        });
        assert_eq!(country_only.display_key(), "IN");

        let city_only = Location::Place(NamedPlace {
            city: Some("Mumbai".to_string()),
            ..Default::default()
        });
        assert_eq!(city_only.display_key(), "Mumbai");

        let coordinates = Location::Place(NamedPlace {
            latitude: Some(19.076),
            longitude: Some(72.8777),
            ..Default::default()
        });
        assert_eq!(coordinates.display_key(), "19.076,72.8777");

        let raw = Location::Raw("Mumbai Central".to_string());
        assert_eq!(raw.display_key(), "Mumbai Central");
    }

    #[test]
    fn test_location_deserializes_string_or_object() {
        let raw: Location = serde_json::from_str("\"Delhi\"").unwrap();
        assert_eq!(raw, Location::Raw("Delhi".to_string()));

        let place: Location = serde_json::from_str(r#"{"city":"Delhi","country":"IN"}"#).unwrap();
        assert_eq!(place.display_key(), "Delhi, IN");
    }

    #[test]
    fn test_ip_address_normalization() {
        let raw = IpAddress::Raw("203.0.113.7".to_string());
        assert_eq!(raw.address().as_deref(), Some("203.0.113.7"));
        assert_eq!(raw.country(), None);

        let details = IpAddress::Details(IpDetails {
            address: Some("203.0.113.7".to_string()),
            country: Some("US".to_string()),
        });
        assert_eq!(details.address().as_deref(), Some("203.0.113.7"));
        assert_eq!(details.country(), Some("US"));

        // No address field: falls back to serializing the record
        let country_only = IpAddress::Details(IpDetails {
            address: None,
            country: Some("US".to_string()),
        });
        assert_eq!(
            country_only.address().as_deref(),
            Some(r#"{"country":"US"}"#)
        );
    }

    #[test]
    fn test_resolved_ip_country_prefers_top_level_field() {
        let transaction = Transaction {
            id: "TXN-001".to_string(),
            amount: 100.0,
            timestamp: Utc::now(),
            transaction_type: "DEBIT".to_string(),
            status: TransactionStatus::Completed,
            location: None,
            device: None,
            ip_address: Some(IpAddress::Details(IpDetails {
                address: Some("203.0.113.7".to_string()),
                country: Some("GB".to_string()),
            })),
            ip_country: Some("US".to_string()),
            recipient_id: None,
            description: None,
        };
        assert_eq!(transaction.resolved_ip_country(), Some("US"));

        let mut nested_only = transaction.clone();
        nested_only.ip_country = None;
        assert_eq!(nested_only.resolved_ip_country(), Some("GB"));

        let mut absent = transaction;
        absent.ip_country = None;
        absent.ip_address = None;
        assert_eq!(absent.resolved_ip_country(), None);
    }

    #[test]
    fn test_status_round_trip_including_open_set() {
        let completed: TransactionStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
        assert_eq!(completed, TransactionStatus::Completed);

        let reversed: TransactionStatus = serde_json::from_str("\"REVERSED\"").unwrap();
        assert_eq!(reversed, TransactionStatus::Other("REVERSED".to_string()));
        assert_eq!(serde_json::to_string(&reversed).unwrap(), "\"REVERSED\"");
    }

    #[test]
    fn test_transaction_wire_shape_is_camel_case() {
        let transaction = Transaction {
            id: "TXN-001".to_string(),
            amount: 100.0,
            timestamp: Utc::now(),
            transaction_type: "CREDIT".to_string(),
            status: TransactionStatus::Pending,
            location: Some(Location::Raw("Delhi".to_string())),
            device: None,
            ip_address: None,
            ip_country: Some("IN".to_string()),
            recipient_id: Some("ACC-42".to_string()),
            description: None,
        };

        let json = serde_json::to_string(&transaction).unwrap();
        assert!(json.contains("\"transactionType\""));
        assert!(json.contains("\"ipCountry\""));
        assert!(json.contains("\"recipientId\""));
        assert!(!json.contains("\"device\""));
    }
}
