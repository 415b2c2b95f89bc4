use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a scheduled snap (UUID v4).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapId(pub String);

impl SnapId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for SnapId {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque reference to a stored photo strip, handed out by the image store
/// and quoted back by the client when it submits the snap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which channel carries the memory back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Deliver to an email address.
    Email,
    /// Deliver to a Telegram handle (leading `@`).
    Telegram,
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeliveryMethod::Email => "email",
            DeliveryMethod::Telegram => "telegram",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "email" => Ok(DeliveryMethod::Email),
            "telegram" => Ok(DeliveryMethod::Telegram),
            other => Err(format!("unknown delivery method: {other}")),
        }
    }
}

/// A fully validated snap, ready to hand to the delivery scheduler.
///
/// This is the shape that crosses the boundary to persistence/delivery.
/// The unlock password is deliberately absent: it gates validation only
/// and is never forwarded downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSnap {
    pub id: SnapId,
    pub caption: String,
    /// Absolute delivery instant. The offset records the wall clock the
    /// send time was computed against (currently the gateway's own).
    pub send_time: DateTime<FixedOffset>,
    pub delivery_method: DeliveryMethod,
    pub delivery_address: String,
    pub image_ref: ImageRef,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_method_round_trips_through_str() {
        for (s, m) in [
            ("email", DeliveryMethod::Email),
            ("telegram", DeliveryMethod::Telegram),
        ] {
            assert_eq!(s.parse::<DeliveryMethod>().unwrap(), m);
            assert_eq!(m.to_string(), s);
        }
        assert!("carrier_pigeon".parse::<DeliveryMethod>().is_err());
    }

    #[test]
    fn delivery_method_serde_tag_is_snake_case() {
        let json = serde_json::to_string(&DeliveryMethod::Telegram).unwrap();
        assert_eq!(json, r#""telegram""#);
    }
}
