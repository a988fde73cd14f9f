use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::JsonRpcError;
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::JSONRPC_VERSION;

/// Decode a single request, with params left in their generic form.
pub fn decode_request<R: Read>(reader: R) -> JsonRpcRequest<RequestParams> {
    decode_request_typed(reader)
}

/// Decode a single request, with params decoded into a caller-chosen type `P`.
///
/// Exactly one JSON value is consumed from `reader`; framing of multiple
/// messages (newline-delimited, body-per-call, ...) is the caller's concern,
/// and a `&mut` reader can be handed back in for the next message.
///
/// This function never fails in the conventional sense. Every outcome is a
/// usable [`JsonRpcRequest`] whose response shell is stamped with the protocol
/// version; failures are recorded in `response.error`:
///
/// - malformed JSON or a params type mismatch leaves `response.id` unset and
///   sets a `-32700` parse error carrying the underlying decode error text;
/// - an empty (or missing) `method`, or a `jsonrpc` other than `"2.0"`, echoes
///   the request id into `response.id` and sets a `-32600` invalid-request
///   error. The method check runs first, so the error for an input failing
///   both is deterministic.
///
/// Callers must check `response.error` before dispatching: when it is set, the
/// response is ready to serialize as-is and the method must not run.
pub fn decode_request_typed<P, R>(reader: R) -> JsonRpcRequest<P>
where
    P: DeserializeOwned,
    R: Read,
{
    let mut de = serde_json::Deserializer::from_reader(reader);
    let mut request = match JsonRpcRequest::<P>::deserialize(&mut de) {
        Ok(request) => request,
        Err(e) => {
            // No fields could be recovered, the id included.
            let mut request = JsonRpcRequest {
                jsonrpc: String::new(),
                method: String::new(),
                params: None,
                id: None,
                response: JsonRpcResponse::default(),
            };
            request.response.error = Some(JsonRpcError::parse_error(e.to_string()));
            return request;
        }
    };

    request.response.id = request.id.clone();
    if request.method.is_empty() {
        request.response.error = Some(JsonRpcError::invalid_request("Invalid method: ''."));
    } else if request.jsonrpc != JSONRPC_VERSION {
        request.response.error = Some(JsonRpcError::invalid_request(format!(
            "Invalid jsonrpc: '{}'.",
            request.jsonrpc
        )));
    }
    request
}
