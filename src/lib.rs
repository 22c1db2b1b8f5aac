// Library root
// ------------
// The binary (`main.rs`) wires these modules together into the
// interactive menu.
//
// Module responsibilities:
// - `menu`: the fixed command table and token resolution.
// - `ui`: the render/read/dispatch loop and its state machine.
// - `console`: terminal access behind a trait, plus an in-memory console.
// - `error`: the crate error type.
pub mod console;
pub mod error;
pub mod menu;
pub mod ui;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr logger filtered by `RUST_LOG`, defaulting to `warn`.
/// Stdout is reserved for the menu itself.
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
