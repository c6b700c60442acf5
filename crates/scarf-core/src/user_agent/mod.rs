//! User-agent composition.
//!
//! `<product>/<version> (platform=<platform>; arch=<arch>, runtime=<runtime>)`,
//! or just `<product>/<version>` when the host cannot be described.

pub mod builder;
pub mod platform;

pub use builder::UserAgentBuilder;
pub use platform::normalize_platform;
