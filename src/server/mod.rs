//! MCP Server implementation
//!
//! Line-delimited JSON-RPC 2.0: one request per input line, one response
//! per output line. The stdio server must never write anything else to
//! stdout; logs go to stderr.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool};
use crate::types::McpResult;

/// MCP protocol revision announced in `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Server that handles JSON-RPC communication over a line stream
pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Create a server on stdin/stdout
    pub fn stdio(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Create a server on arbitrary streams
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Give back the output stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Serve requests until the input stream ends
    pub fn run(&mut self) -> McpResult<()> {
        tracing::info!(
            server = %self.server_info.name,
            version = %self.server_info.version,
            tools = self.tools.len(),
            "MCP server ready"
        );

        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single JSON-RPC request line
    fn handle_request(&mut self, request_str: &str) -> McpResult<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        tracing::debug!(method = %request.method, "Request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            _ if request.is_notification() => Ok(()),
            method => self.send(&JsonRpcError::method_not_found(id, method)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> McpResult<()> {
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

    fn handle_tools_list(&mut self, id: Value) -> McpResult<()> {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> McpResult<()> {
        let Some(params) = params else {
            return self.send(&JsonRpcError::invalid_params(id, "missing parameters"));
        };
        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return self.send(&JsonRpcError::invalid_params(id, "missing tool name"));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return self.send(&JsonRpcError::unknown_tool(id, tool_name));
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match tool.execute(arguments) {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                tracing::warn!(tool = %tool_name, error = %e, "Tool failed");
                self.send(&JsonRpcError::tool_error(id, e.to_string()))
            }
        }
    }

    fn send<T: Serialize>(&mut self, response: &T) -> McpResult<()> {
        let json = serde_json::to_string(response)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
