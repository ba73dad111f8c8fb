//! Protocol types for MCP and JSON-RPC communication

mod jsonrpc;
mod mcp;

pub use jsonrpc::{ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use mcp::{McpTool, ServerInfo, Tool, PROTOCOL_VERSION};
