//! Platform capability wrapper
//!
//! Some metadata queries only exist on newer platform versions. The host
//! snapshot records the outcome of such a query as a `Capability`: either the
//! value it produced, or `Unsupported` with the platform's reason.

use serde::{Deserialize, Serialize};

/// Outcome of a metadata query that the running platform may not support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum Capability<T> {
    Supported(T),
    Unsupported { reason: String },
}

impl<T> Capability<T> {
    pub fn supported(value: T) -> Self {
        Self::Supported(value)
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    pub fn as_ref(&self) -> Capability<&T> {
        match self {
            Self::Supported(value) => Capability::Supported(value),
            Self::Unsupported { reason } => Capability::Unsupported {
                reason: reason.clone(),
            },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Capability<U> {
        match self {
            Self::Supported(value) => Capability::Supported(f(value)),
            Self::Unsupported { reason } => Capability::Unsupported { reason },
        }
    }

    /// The supported value, discarding the reason when unsupported.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Supported(value) => Some(value),
            Self::Unsupported { .. } => None,
        }
    }

    /// Reason reported by the platform, if the query was unsupported.
    pub fn unsupported_reason(&self) -> Option<&str> {
        match self {
            Self::Supported(_) => None,
            Self::Unsupported { reason } => Some(reason),
        }
    }
}

impl<T: Default> Default for Capability<T> {
    fn default() -> Self {
        Self::Supported(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_unsupported_reason() {
        let cap: Capability<u32> = Capability::unsupported("1.12 has no attribute API");
        let mapped = cap.map(|v| v + 1);
        assert_eq!(
            mapped.unsupported_reason(),
            Some("1.12 has no attribute API")
        );
    }

    #[test]
    fn supported_round_trips_through_json() {
        let cap = Capability::supported(vec![1u8, 2]);
        let json = serde_json::to_string(&cap).expect("serialize");
        assert_eq!(json, r#"{"status":"supported","value":[1,2]}"#);
        let back: Capability<Vec<u8>> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cap);
    }

    #[test]
    fn default_is_supported_default_value() {
        let cap: Capability<Vec<u8>> = Capability::default();
        assert_eq!(cap.into_option(), Some(Vec::new()));
    }
}
