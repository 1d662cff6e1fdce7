//! Symbol table.
//!
//! Maps label text to resolved 32-bit addresses. Populated left to right in
//! the first assembler pass and read-only afterwards. Redefining a label
//! replaces the earlier address.

use std::collections::BTreeMap;

use serde::Serialize;

/// Label to address mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    labels: BTreeMap<String, u32>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Binds `name` to `addr`, returning the address it previously had.
    pub fn define(&mut self, name: &str, addr: u32) -> Option<u32> {
        let previous = self.labels.insert(name.to_string(), addr);
        if let Some(old) = previous {
            tracing::warn!(label = name, old = old, new = addr, "label redefined");
        }
        previous
    }

    /// Looks up the address bound to `name`.
    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    /// Iterates over `(label, address)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.labels.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no label is defined.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
