//! JSON-RPC 2.0 protocol types

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC 2.0 Request
#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Check if this is a valid JSON-RPC 2.0 request
    pub fn is_valid(&self) -> bool {
        self.jsonrpc == "2.0"
    }

    /// Check if this is a notification (no id)
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 Success Response
#[derive(Serialize, Debug)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Value,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

/// JSON-RPC 2.0 Error Response
#[derive(Serialize, Debug)]
pub struct JsonRpcError {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Value, code: i32, message: String, data: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorObject {
                code,
                message,
                data,
            },
        }
    }

    pub fn parse_error(id: Value, details: String) -> Self {
        Self::new(
            id,
            PARSE_ERROR,
            "Parse error".to_string(),
            Some(json!({"details": details})),
        )
    }

    pub fn invalid_request(id: Value, details: String) -> Self {
        Self::new(
            id,
            INVALID_REQUEST,
            "Invalid Request".to_string(),
            Some(json!({"details": details})),
        )
    }

    pub fn method_not_found(id: Value, method: String) -> Self {
        Self::new(
            id,
            METHOD_NOT_FOUND,
            "Method not found".to_string(),
            Some(json!({"method": method})),
        )
    }

    /// Unknown tool name in a tools/call request
    pub fn unknown_tool(id: Value, tool: String) -> Self {
        Self::new(
            id,
            INVALID_PARAMS,
            "Unknown tool".to_string(),
            Some(json!({"tool": tool})),
        )
    }

    pub fn invalid_params(id: Value, details: String) -> Self {
        Self::new(
            id,
            INVALID_PARAMS,
            "Invalid params".to_string(),
            Some(json!({"details": details})),
        )
    }

    /// A tool ran and failed
    pub fn tool_error(id: Value, details: String) -> Self {
        Self::new(
            id,
            INTERNAL_ERROR,
            "Tool execution error".to_string(),
            Some(json!({"details": details})),
        )
    }
}

/// JSON-RPC 2.0 Error Object
#[derive(Serialize, Debug)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
