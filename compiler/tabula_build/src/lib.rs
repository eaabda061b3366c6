//! Table construction support for the Tabula parser generator.
//!
//! When building the parse table (and the lexical automaton's table) two
//! different actions can compete for the same cell. This crate decides which
//! one wins and keeps a human-readable record of each genuine ambiguity:
//!
//! - [`ParseAction`] / [`LexAction`]: closed sets of cell candidates
//! - [`ConflictManager`]: the decision procedure and the conflict log
//! - [`ParseTable`] / [`LexTable`]: cell storage that routes collisions
//!   through a manager
//!
//! # Determinism
//!
//! Ties are broken by grammar declaration order, never by discovery order, so
//! the same grammar always yields the same tables and the same conflict list.
//!
//! ```text
//! let mut manager = ConflictManager::new(syntax, lexical, rule_names);
//! if manager.resolve_parse_action(&symbol, &existing, &candidate) {
//!     // overwrite the cell with `candidate`
//! }
//! for conflict in manager.conflicts() {
//!     eprintln!("{conflict}");
//! }
//! ```

mod action;
mod conflict;
mod manager;
mod table;

use std::sync::Once;

pub use action::{message_for_action, LexAction, ParseAction, ParseActionKind, StateId};
pub use conflict::{merge_conflicts, Conflict};
pub use manager::ConflictManager;
pub use table::{LexState, LexTable, ParseState, ParseTable};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tabula_build=debug` to see each recorded conflict, or
/// `RUST_LOG=tabula_build=trace` to see every resolution decision.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
