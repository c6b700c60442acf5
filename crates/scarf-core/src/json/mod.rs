//! Minimal JSON encoder for event bodies.
//!
//! Two paths, deliberately kept apart:
//! - [`encode_properties`] writes a top-level event object where every
//!   non-null value is sent as a JSON string of its display form.
//! - [`to_json`] writes any value with native JSON structure (numbers,
//!   booleans, arrays, objects).
//!
//! Encoding is total: there is no error path.

pub mod encoder;
pub mod escape;

pub use encoder::{encode_properties, format_float, to_json};
pub use escape::quote;
