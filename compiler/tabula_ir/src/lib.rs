//! Tabula IR - grammar identity types
//!
//! Shared by every stage of table construction:
//! - [`Symbol`]: identity of a rule or token
//! - [`PreparedGrammar`]: declaration-order registry used as a priority oracle
//! - [`RuleNames`]: display names for diagnostics
//!
//! # Design Philosophy
//!
//! - **Index, don't point**: symbols are positions in an immutable ordered list
//! - **Build once**: registries are constructed before table construction and
//!   never mutated afterwards

mod grammar;
mod rule_names;
mod symbol;

pub use grammar::{GrammarError, PreparedGrammar};
pub use rule_names::RuleNames;
pub use symbol::{Symbol, SymbolKind};
