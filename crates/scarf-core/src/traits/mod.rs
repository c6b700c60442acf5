//! Seams the dispatcher is built against.

pub mod cancellation;
pub mod diagnostics;
pub mod host;
pub mod metadata;
pub mod transport;

pub use cancellation::{Cancellable, CancellationToken};
pub use diagnostics::DiagnosticSink;
pub use host::{HostFacts, HostIntrospect};
pub use metadata::BuildMetadata;
pub use transport::{EventRequest, HttpTransport, TransportResponse};
