//! Candidate actions for parse and lex table cells.
//!
//! Both action sets are closed. The resolver relies on that: every match over
//! an action in this crate is exhaustive, so adding a variant is a compile
//! error at each decision point rather than a silent fallthrough.

use std::fmt;

use tabula_ir::{RuleNames, Symbol};

/// Index of an automaton state within its table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        StateId(raw)
    }

    /// Create from a position in a state list.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok(), "state index {index} overflows u32");
        #[expect(
            clippy::cast_possible_truncation,
            reason = "state counts stay far below u32::MAX"
        )]
        let raw = index as u32;
        StateId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority tag of a [`ParseAction`].
///
/// The declaration order is the priority order: `Error < Shift < Reduce < Accept`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseActionKind {
    Error,
    Shift,
    Reduce,
    Accept,
}

/// A single candidate for a parse table cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseAction {
    /// Placeholder for an empty cell.
    Error,
    /// Consume the lookahead and move to `state`.
    Shift { state: StateId },
    /// Pop `child_count` entries and reduce to the rule `symbol`.
    Reduce { symbol: Symbol, child_count: usize },
    /// The whole input was recognized.
    Accept,
}

impl ParseAction {
    pub fn shift(state: StateId) -> Self {
        ParseAction::Shift { state }
    }

    pub fn reduce(symbol: Symbol, child_count: usize) -> Self {
        ParseAction::Reduce {
            symbol,
            child_count,
        }
    }

    #[inline]
    pub fn kind(&self) -> ParseActionKind {
        match self {
            ParseAction::Error => ParseActionKind::Error,
            ParseAction::Shift { .. } => ParseActionKind::Shift,
            ParseAction::Reduce { .. } => ParseActionKind::Reduce,
            ParseAction::Accept => ParseActionKind::Accept,
        }
    }
}

/// Renders with raw symbol names. Diagnostics go through [`message_for_action`].
impl fmt::Display for ParseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAction::Error => f.write_str("error"),
            ParseAction::Shift { state } => write!(f, "shift {state}"),
            ParseAction::Reduce { symbol, .. } => write!(f, "reduce {symbol}"),
            ParseAction::Accept => f.write_str("accept"),
        }
    }
}

/// A single candidate for a lex table cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LexAction {
    /// Placeholder for an empty cell.
    Error,
    /// Consume the character and move to `state`.
    Advance { state: StateId },
    /// A complete token `symbol` was recognized.
    Accept { symbol: Symbol },
}

impl LexAction {
    pub fn advance(state: StateId) -> Self {
        LexAction::Advance { state }
    }

    pub fn accept(symbol: Symbol) -> Self {
        LexAction::Accept { symbol }
    }
}

impl fmt::Display for LexAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexAction::Error => f.write_str("error"),
            LexAction::Advance { state } => write!(f, "advance {state}"),
            LexAction::Accept { symbol } => write!(f, "accept {symbol}"),
        }
    }
}

/// Describe a parse action for a conflict message.
///
/// A reduction whose rule has no registered name renders as `ERROR <raw name>`:
/// the symbol table handed to the manager is incomplete, and the marker makes
/// that visible in the diagnostic instead of aborting table construction.
pub fn message_for_action(action: &ParseAction, rule_names: &RuleNames) -> String {
    match action {
        ParseAction::Shift { .. } => "shift".to_owned(),
        ParseAction::Reduce { symbol, .. } => match rule_names.get(symbol) {
            Some(name) => format!("reduce {name}"),
            None => format!("ERROR {}", symbol.name()),
        },
        ParseAction::Accept => "accept".to_owned(),
        ParseAction::Error => "error".to_owned(),
    }
}
