//! Display names for syntax symbols.

use rustc_hash::FxHashMap;

use crate::Symbol;

/// Mapping from syntax symbol to the name shown in diagnostics.
///
/// Supplied once when table construction starts and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleNames {
    names: FxHashMap<Symbol, String>,
}

impl RuleNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name, returning the previous one if any.
    pub fn insert(&mut self, symbol: Symbol, name: impl Into<String>) -> Option<String> {
        self.names.insert(symbol, name.into())
    }

    #[inline]
    pub fn get(&self, symbol: &Symbol) -> Option<&str> {
        self.names.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Symbol, S)> for RuleNames {
    fn from_iter<I: IntoIterator<Item = (Symbol, S)>>(iter: I) -> Self {
        RuleNames {
            names: iter
                .into_iter()
                .map(|(symbol, name)| (symbol, name.into()))
                .collect(),
        }
    }
}
