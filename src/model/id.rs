//! Entity ID generation and parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique entity identifier.
///
/// Identifiers are opaque and correlated by equality only; they carry no
/// storage-engine handle. Format: `lift_{timestamp_ms}_{random_hex}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    timestamp: DateTime<Utc>,
    random: [u8; 8],
}

impl EntityId {
    /// Generate a new entity ID.
    pub fn new() -> Self {
        let mut random = [0u8; 8];
        getrandom::getrandom(&mut random).expect("Failed to generate random bytes");

        // Truncate to milliseconds for consistent serialization
        let now = Utc::now();
        let timestamp = DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        Self { timestamp, random }
    }

    /// Get the creation timestamp embedded in the ID.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Parse an entity ID from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.strip_prefix("lift_")?;
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 2 {
            return None;
        }

        let ts_millis: i64 = parts[0].parse().ok()?;
        let timestamp = DateTime::from_timestamp_millis(ts_millis)?;
        let random_bytes = hex::decode(parts[1]).ok()?;
        if random_bytes.len() != 8 {
            return None;
        }

        let mut random = [0u8; 8];
        random.copy_from_slice(&random_bytes);

        Some(Self { timestamp, random })
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lift_{}_{}",
            self.timestamp.timestamp_millis(),
            hex::encode(self.random)
        )
    }
}

// Custom serialization to store as string
impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityId::parse(&s).ok_or_else(|| serde::de::Error::custom("Invalid entity ID format"))
    }
}
