use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier attached to a JSON-RPC request and echoed on its response.
/// JSON-RPC 2.0 permits strings and numbers; absence (or an explicit null)
/// is modeled as `Option<RequestId>` on the envelope types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
}

impl RequestId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RequestId::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RequestId::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::String(s) => write!(f, "{}", s),
            RequestId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_serialization() {
        let id_str = RequestId::String("test".to_string());
        let id_num = RequestId::Number(42);

        assert_eq!(serde_json::to_string(&id_str).unwrap(), r#""test""#);
        assert_eq!(serde_json::to_string(&id_num).unwrap(), "42");
    }

    #[test]
    fn test_request_id_deserialization() {
        let id: RequestId = serde_json::from_str("1").unwrap();
        assert_eq!(id, RequestId::Number(1));

        let id: RequestId = serde_json::from_str(r#""req-7""#).unwrap();
        assert_eq!(id.as_str(), Some("req-7"));
    }

    #[test]
    fn test_request_id_conversions() {
        assert_eq!(RequestId::from(5), RequestId::Number(5));
        assert_eq!(RequestId::from("a"), RequestId::String("a".to_string()));
        assert_eq!(RequestId::Number(9).to_string(), "9");
    }
}
