//! Declaration-order symbol registry.
//!
//! A [`PreparedGrammar`] is built once, before table construction, from the
//! rules or tokens in the order the grammar declared them. It is read-only
//! afterwards and answers one question: which of two symbols was declared
//! first. Lower index means declared earlier.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{RuleNames, Symbol};

/// Error when building a [`PreparedGrammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The same symbol appeared twice in the declaration list.
    DuplicateSymbol {
        name: String,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateSymbol {
                name,
                first,
                second,
            } => write!(
                f,
                "symbol `{name}` declared twice (positions {first} and {second})"
            ),
        }
    }
}

impl std::error::Error for GrammarError {}

/// Ordered registry of the symbols of one grammar.
///
/// Two independent registries exist during table construction: one for the
/// syntax grammar and one for the lexical grammar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreparedGrammar {
    /// Symbols in declaration order.
    symbols: Vec<Symbol>,
    /// Back-reference from symbol to its position in `symbols`.
    indices: FxHashMap<Symbol, usize>,
}

impl PreparedGrammar {
    /// Build a registry from symbols in declaration order.
    ///
    /// Fails if any symbol is listed more than once, since the registry must
    /// be a total order.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, GrammarError> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        let mut indices = FxHashMap::default();
        indices.reserve(symbols.len());

        for (position, symbol) in symbols.iter().enumerate() {
            if let Some(&first) = indices.get(symbol) {
                return Err(GrammarError::DuplicateSymbol {
                    name: symbol.name().to_owned(),
                    first,
                    second: position,
                });
            }
            indices.insert(symbol.clone(), position);
        }

        tracing::debug!(count = symbols.len(), "prepared grammar");
        Ok(PreparedGrammar { symbols, indices })
    }

    /// Declaration index of `symbol`, or `None` if it was never declared.
    #[inline]
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.indices.get(symbol).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.indices.contains_key(symbol)
    }

    /// Symbol declared at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// All symbols in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Name mapping taken from the symbols' own display names.
    pub fn rule_names(&self) -> RuleNames {
        self.symbols
            .iter()
            .map(|symbol| (symbol.clone(), symbol.name()))
            .collect()
    }
}
