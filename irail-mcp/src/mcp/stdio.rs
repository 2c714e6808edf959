//! Newline-delimited JSON-RPC over stdin and stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::server::McpServer;

/// Serve until stdin closes.
pub async fn serve_stdio(server: McpServer) -> std::io::Result<()> {
    tracing::info!("serving MCP over stdio");
    serve_lines(&server, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Answer one message per input line. Blank lines are skipped and each
/// response is written as a single line.
pub async fn serve_lines<R, W>(server: &McpServer, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(response) = server.handle_message(line).await {
            let mut out = serde_json::to_vec(&response)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
