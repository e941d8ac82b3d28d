//! Basic example: connect, write a frame, signal a diagnostic error, close.
//!
//! Run with: `cargo run --example basic --features full -- wss://echo.websocket.org`

use futures::StreamExt;
use ws_sink::{socket, ResponseWriter, SinkConfig, WsSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wss://echo.websocket.org".to_string());

    println!("Connecting to {url}...");
    let (transport, mut frames) = socket::connect(&url).await?;
    let sink = WsSink::new(transport, SinkConfig::text());

    sink.write_text("ping").await?;
    println!("Sent one text frame via {sink}");

    if let Some(frame) = frames.next().await {
        println!("[recv] {:?}", frame?);
    }

    // Neither of these can reach the wire; both only log.
    sink.write_error(500, "dispatched target failed");
    sink.redirect("/elsewhere");

    println!("Idle for {:?}", sink.idle_for());
    sink.close().await?;
    Ok(())
}
