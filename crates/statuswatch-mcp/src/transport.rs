//! Line-delimited JSON-RPC transport over stdio.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::protocol::{McpError, McpRequest, McpResponse, RequestId};
use crate::server::McpServer;

/// Transport errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request task failed: {0}")]
    Task(String),
}

/// Serves an `McpServer` over newline-delimited JSON.
///
/// Requests are handled concurrently so a slow status check does not hold
/// up a `stop_monitoring` call queued behind it. Responses are written in
/// completion order.
pub struct StdioTransport {
    server: Arc<McpServer>,
}

impl StdioTransport {
    pub fn new(server: Arc<McpServer>) -> Self {
        Self { server }
    }

    /// Serve the process stdin/stdout until stdin closes.
    pub async fn run(&self) -> Result<(), TransportError> {
        info!("Serving MCP on stdio");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve requests read from `reader`, writing responses to `writer`,
    /// until `reader` reaches EOF and every in-flight request has answered.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), TransportError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        // Partial reads stay in `buf` when the read branch loses a select.
        let mut buf = Vec::new();
        let mut in_flight: JoinSet<Option<McpResponse>> = JoinSet::new();
        let mut open = true;

        loop {
            tokio::select! {
                read = reader.read_until(b'\n', &mut buf), if open => {
                    if read? == 0 {
                        debug!(pending = in_flight.len(), "Input closed");
                        open = false;
                        continue;
                    }

                    let resp = match std::str::from_utf8(&buf) {
                        Ok(line) => self.accept(line, &mut in_flight),
                        Err(e) => {
                            warn!(error = %e, "Input line is not valid UTF-8");
                            Some(McpResponse::error(None, McpError::parse_error()))
                        }
                    };
                    buf.clear();

                    if let Some(resp) = resp {
                        write_response(&mut writer, &resp).await?;
                    }
                },
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    let resp = joined.map_err(|e| TransportError::Task(e.to_string()))?;
                    if let Some(resp) = resp {
                        write_response(&mut writer, &resp).await?;
                    }
                }
                else => break,
            }
        }

        Ok(())
    }

    /// Decode one line. Returns an immediate error response for lines that
    /// are not a request; valid requests are spawned into `in_flight`.
    fn accept(
        &self,
        line: &str,
        in_flight: &mut JoinSet<Option<McpResponse>>,
    ) -> Option<McpResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Malformed JSON-RPC message");
                return Some(McpResponse::error(None, McpError::parse_error()));
            }
        };

        let request: McpRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Invalid JSON-RPC request");
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
                return Some(McpResponse::error(id, McpError::invalid_request()));
            }
        };

        debug!(method = %request.method, id = ?request.id, "Request received");
        let server = Arc::clone(&self.server);
        in_flight.spawn(async move { server.handle(request).await });
        None
    }
}

async fn write_response<W>(writer: &mut W, response: &McpResponse) -> Result<(), TransportError>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_string(response)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
