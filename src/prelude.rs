//! # JSON-RPC Envelope Prelude
//!
//! This module provides convenient re-exports of the most commonly used types
//! from the envelope library.
//!
//! ```rust
//! use jsonrpc_envelope::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::decode::{decode_request, decode_request_typed};
pub use crate::error::{JsonRpcError, JsonRpcErrorCode, JsonRpcTransportError};
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::JsonRpcResponse;
pub use crate::types::RequestId;

// Standard error codes
pub use crate::error_codes::*;
