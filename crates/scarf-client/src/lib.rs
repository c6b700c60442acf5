//! # scarf-client
//!
//! Blocking client that posts telemetry events to a Scarf collection
//! endpoint. Honors the `DO_NOT_TRACK` / `SCARF_NO_ANALYTICS` opt-outs and
//! reports delivery as a plain `bool`: no retries, no queueing.
//!
//! ```no_run
//! use scarf_client::EventDispatcher;
//! use scarf_core::Properties;
//!
//! let dispatcher = EventDispatcher::new("https://scarf.gateway.scarf.sh/my-package")?;
//! let event = Properties::new()
//!     .with("event", "package_download")
//!     .with("version", "1.0.0");
//! let delivered = dispatcher.send(&event);
//! # let _ = delivered;
//! # Ok::<(), scarf_core::errors::ConfigError>(())
//! ```

pub mod diagnostics;
pub mod dispatcher;
pub mod transport;

pub use diagnostics::{MemorySink, StderrSink};
pub use dispatcher::{DispatchOutcome, EventDispatcher, EventDispatcherBuilder};
pub use transport::HttpClient;
