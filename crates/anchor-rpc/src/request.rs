//! JSON-RPC request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{RpcError, RpcResult};

/// A single JSON-RPC request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, if the client sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,

    /// Echoed back in the response.
    #[serde(default)]
    pub id: Value,

    /// Command name.
    pub method: String,

    /// Positional array or named object, absent meaning no params.
    #[serde(default)]
    pub params: Value,
}

/// Error member of a failed response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Error code, see [`RpcError::code`].
    pub code: i64,

    /// Human readable message.
    pub message: String,
}

impl From<&RpcError> for RpcErrorObject {
    fn from(e: &RpcError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
        }
    }
}

/// A single JSON-RPC response.  Exactly one of `result` and `error` is
/// non-null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Command output, `null` on failure.
    pub result: Value,

    /// Failure, `null` on success.
    pub error: Option<RpcErrorObject>,

    /// The request's id.
    pub id: Value,
}

impl RpcResponse {
    /// Constructs the response to a command's outcome.
    pub fn from_result(id: Value, res: RpcResult<Value>) -> Self {
        match res {
            Ok(result) => Self {
                result,
                error: None,
                id,
            },
            Err(e) => Self {
                result: Value::Null,
                error: Some(RpcErrorObject::from(&e)),
                id,
            },
        }
    }

    /// Returns whether the command failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: RpcRequest = serde_json::from_str(r#"{"method": "ping"}"#).unwrap();
        assert_eq!(req.method, "ping");
        assert_eq!(req.id, Value::Null);
        assert_eq!(req.params, Value::Null);
        assert_eq!(req.jsonrpc, None);
    }

    #[test]
    fn test_success_response() {
        let resp = RpcResponse::from_result(json!(1), Ok(json!({"a": 1})));
        assert!(!resp.is_error());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"result": {"a": 1}, "error": null, "id": 1})
        );
    }

    #[test]
    fn test_error_response() {
        let resp = RpcResponse::from_result(
            json!("x"),
            Err(RpcError::MethodNotFound("nope".to_owned())),
        );
        assert!(resp.is_error());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "result": null,
                "error": {"code": -32601, "message": "method not found: nope"},
                "id": "x"
            })
        );
    }
}
