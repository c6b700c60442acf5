//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Name of the span wrapping one event dispatch.
pub const SEND_SPAN: &str = "scarf.send";

/// Initialize structured logging for the client.
///
/// Reads `SCARF_LOG` for filter directives, e.g. `SCARF_LOG=scarf_client=debug`.
/// Falls back to `scarf_core=info,scarf_client=info` if unset or invalid.
///
/// Idempotent; only the first call installs a subscriber. Embedders that
/// already run their own subscriber should not call this.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new("scarf_core=info,scarf_client=info"));

        // A subscriber installed elsewhere wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .try_init();
    });
}
