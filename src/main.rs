use anyhow::Result;
use tracing::info;

use rookgate_console::ConsoleSession;

fn main() -> Result<()> {
    // stdout carries the console protocol, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "rookgate starting");
    ConsoleSession::new().run()?;
    Ok(())
}
