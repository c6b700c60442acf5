//! Immutable environment snapshot.

use std::collections::HashMap;

/// Variable name → value, captured once.
///
/// The dispatcher only ever reads variables through a snapshot, so tests
/// can inject one and the process environment is read in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// A snapshot with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<HashMap<String, String>> for Environment {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl From<Option<HashMap<String, String>>> for Environment {
    fn from(vars: Option<HashMap<String, String>>) -> Self {
        vars.map(Self::from).unwrap_or_default()
    }
}
