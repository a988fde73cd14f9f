//! # JSON-RPC 2.0 Envelope Library
//!
//! A pure, transport-agnostic implementation of the JSON-RPC 2.0 message
//! contract: decoding request envelopes, validating them against the
//! protocol, and framing success/error responses.
//!
//! This crate owns neither the byte stream nor method dispatch. The caller
//! feeds [`decode_request`] (or [`decode_request_typed`]) one JSON value at a
//! time and gets back a [`JsonRpcRequest`] carrying a pre-populated response
//! shell. If `request.response.error` is set, the decode or envelope
//! validation failed and the response is ready to serialize as-is; otherwise
//! the caller dispatches on `request.method`, attaches a result (or error) to
//! the shell, and writes it with [`JsonRpcResponse::write`].
//!
//! ## Features
//! - Full JSON-RPC 2.0 request/response envelope compliance
//! - Transport agnostic (works with HTTP bodies, sockets, pipes, etc.)
//! - Typed or generic `params` decoding, chosen per call
//! - Failures delivered through the response shell, never as decode panics
//!   or errors, so every inbound message yields a serializable response

pub mod decode;
pub mod error;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use decode::{decode_request, decode_request_typed};
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcTransportError};
pub use request::{JsonRpcRequest, RequestParams};
pub use response::JsonRpcResponse;
pub use types::RequestId;

/// JSON-RPC 2.0 version constant, stamped on every response shell and
/// required on every inbound request
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
///
/// Codes from -32768 to -32000 are reserved for pre-defined errors and must
/// not be reused by application-level errors.
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
