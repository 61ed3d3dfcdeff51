//! Symbol table for labels and constants

use indexmap::IndexMap;

use crate::Value;

/// Label and constant bindings for one assembly run, kept in definition order.
/// Names are case-sensitive; redefining a name overwrites its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: IndexMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: IndexMap::new(),
        }
    }

    /// Bind `name`, returning the previous value if there was one.
    pub fn insert(&mut self, name: &str, value: Value) -> Option<Value> {
        self.symbols.insert(name.to_string(), value)
    }

    /// Forget `name`; it reads as undefined afterwards.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.symbols.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.symbols.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
