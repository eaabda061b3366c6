//! Grammar symbol identity.
//!
//! A [`Symbol`] names a rule or token by its position within its own kind.
//! Two symbols are the same symbol when their kind and index agree; the raw
//! display name rides along for error-path rendering only.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Which family of grammar entity a symbol belongs to.
///
/// The derived ordering puts rules before tokens before builtins, which is
/// only used to give symbols a total order for sorted output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// A syntax rule (nonterminal).
    Rule,
    /// A lexical token (terminal).
    Token,
    /// A reserved symbol every grammar implicitly contains.
    Builtin,
}

/// Identity of a grammar rule or token.
///
/// # Identity
/// Equality, ordering and hashing use `(kind, index)` only. Two symbols that
/// happen to share a display name are still distinct.
#[derive(Clone)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    index: u32,
    kind: SymbolKind,
    name: String,
}

impl Symbol {
    /// Index of the end-of-input builtin.
    const END_INDEX: u32 = 0;
    /// Index of the error builtin.
    const ERROR_INDEX: u32 = 1;

    /// Create a symbol of the given kind.
    pub fn new(kind: SymbolKind, index: u32, name: impl Into<String>) -> Self {
        Symbol {
            index,
            kind,
            name: name.into(),
        }
    }

    /// Create a syntax rule symbol.
    pub fn rule(index: u32, name: impl Into<String>) -> Self {
        Self::new(SymbolKind::Rule, index, name)
    }

    /// Create a lexical token symbol.
    pub fn token(index: u32, name: impl Into<String>) -> Self {
        Self::new(SymbolKind::Token, index, name)
    }

    /// The end-of-input symbol.
    pub fn end() -> Self {
        Self::new(SymbolKind::Builtin, Self::END_INDEX, "end")
    }

    /// The error symbol.
    pub fn error() -> Self {
        Self::new(SymbolKind::Builtin, Self::ERROR_INDEX, "ERROR")
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Raw display name. Diagnostics should prefer a registered rule name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_rule(&self) -> bool {
        self.kind == SymbolKind::Rule
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        self.kind == SymbolKind::Token
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.kind == SymbolKind::Builtin
    }

    #[inline]
    fn key(&self) -> (SymbolKind, u32) {
        (self.kind, self.index)
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}, {:?})", self.kind, self.index, self.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
