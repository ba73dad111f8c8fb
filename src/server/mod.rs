//! MCP Server implementation
//!
//! This module contains the server that handles JSON-RPC communication,
//! one request per line.

mod handlers;

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::ThesaurusResult;

pub use handlers::*;

/// MCP Server that handles JSON-RPC communication, over stdio by default
pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: HashMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Create a new stdio server with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a new stdio server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Create a server over arbitrary line-oriented streams
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: HashMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.definition().name;
        self.tools.insert(name, tool);
        self
    }

    /// Get the number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Consume the server, returning its output stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the server until the input stream closes (blocking)
    pub fn run(&mut self) -> ThesaurusResult<()> {
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }
        Ok(())
    }

    /// Handle a single JSON-RPC request
    fn handle_request(&mut self, request_str: &str) -> ThesaurusResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                return self.send(&JsonRpcError::parse_error(Value::Null, e.to_string()));
            }
        };

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(
                request.id.unwrap_or(Value::Null),
                "jsonrpc must be '2.0'".to_string(),
            ));
        }

        let is_notification = request.is_notification();
        let id = request.id.unwrap_or(Value::Null);

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()), // Notification, no response
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            _ if is_notification => Ok(()),
            _ => self.send(&JsonRpcError::method_not_found(id, request.method)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> ThesaurusResult<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> ThesaurusResult<()> {
        let mut tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> ThesaurusResult<()> {
        let Some(params) = params else {
            return self.send(&JsonRpcError::invalid_params(
                id,
                "Missing parameters".to_string(),
            ));
        };

        let Some(tool_name) = extract_tool_name(&params) else {
            return self.send(&JsonRpcError::invalid_params(
                id,
                "Missing tool name".to_string(),
            ));
        };

        let outcome = match self.tools.get(tool_name) {
            Some(tool) => tool.execute(extract_arguments(&params)),
            None => {
                let error = JsonRpcError::unknown_tool(id, tool_name.to_string());
                return self.send(&error);
            }
        };

        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                eprintln!("[Server] Tool '{}' failed: {}", tool_name, e);
                let error = JsonRpcError::tool_error(id, e.to_string());
                self.send(&error)
            }
        }
    }

    /// Write one response line and flush
    fn send<T: Serialize>(&mut self, response: &T) -> ThesaurusResult<()> {
        let json = serde_json::to_string(response)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
