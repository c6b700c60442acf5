//! Event property model: a closed value type and an insertion-ordered map.

pub mod map;
pub mod value;

pub use map::Properties;
pub use value::PropertyValue;
