use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{JsonRpcError, JsonRpcTransportError};
use crate::types::RequestId;
use crate::JSONRPC_VERSION;

/// A JSON-RPC response, see <https://www.jsonrpc.org/specification#response_object>
///
/// Exactly one of `error`/`result` should be set by the time the response is
/// serialized; this is the caller's contract, not enforced here. `id` is
/// always emitted on the wire, as an explicit `null` when the inbound request
/// carried none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    pub id: Option<RequestId>,
}

impl JsonRpcResponse {
    pub fn new(id: Option<RequestId>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            error: None,
            result: None,
            id,
        }
    }

    pub fn success(id: Option<RequestId>, result: Value) -> Self {
        Self {
            result: Some(result),
            ..Self::new(id)
        }
    }

    pub fn error(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(id)
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serialize the response as a single JSON object to `writer`.
    /// Performs no validation of which fields are set.
    pub fn write<W: io::Write>(&self, writer: W) -> Result<(), JsonRpcTransportError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

/// The version-stamped response shell attached to every decoded request.
impl Default for JsonRpcResponse {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization_omits_error() {
        let response = JsonRpcResponse::success(Some(RequestId::Number(1)), json!("ok"));

        let json_str = serde_json::to_string(&response).unwrap();
        assert!(json_str.contains("\"result\":\"ok\""));
        assert!(json_str.contains("\"id\":1"));
        assert!(!json_str.contains("\"error\""));
    }

    #[test]
    fn test_error_serialization_omits_result() {
        let response = JsonRpcResponse::error(
            Some(RequestId::Number(1)),
            JsonRpcError::new(
                crate::JsonRpcErrorCode::MethodNotFound,
                Some("not found".to_string()),
                None,
            ),
        );

        let json_str = serde_json::to_string(&response).unwrap();
        assert!(json_str.contains("\"error\""));
        assert!(json_str.contains("-32601"));
        assert!(!json_str.contains("\"result\""));
    }

    #[test]
    fn test_id_emitted_as_null_when_absent() {
        let response = JsonRpcResponse::success(None, json!(true));

        let json_str = serde_json::to_string(&response).unwrap();
        assert!(json_str.contains("\"id\":null"));
    }

    #[test]
    fn test_default_is_version_stamped_shell() {
        let shell = JsonRpcResponse::default();
        assert_eq!(shell.jsonrpc, JSONRPC_VERSION);
        assert!(shell.error.is_none());
        assert!(shell.result.is_none());
        assert!(shell.id.is_none());
    }

    #[test]
    fn test_write_to_sink() {
        let response = JsonRpcResponse::success(Some(RequestId::String("w".to_string())), json!(7));

        let mut sink = Vec::new();
        response.write(&mut sink).unwrap();

        let parsed: JsonRpcResponse = serde_json::from_slice(&sink).unwrap();
        assert_eq!(parsed, response);
    }
}
