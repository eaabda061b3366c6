//! Conflict resolution for table construction.
//!
//! The table builder calls into a [`ConflictManager`] whenever a cell already
//! holds an action and another candidate shows up for the same cell. The
//! manager decides which one stays and logs genuine ambiguities.
//!
//! # Parse Policy
//!
//! Independent of which candidate was discovered first:
//! - `Error` loses to everything (it marks an empty cell).
//! - `Shift` beats `Reduce` and `Accept`. Shift/shift and shift/reduce are logged.
//! - Reduce/reduce goes to the rule declared earliest in the syntax grammar,
//!   and is logged.
//! - Accept/accept keeps the existing action, unlogged.
//!
//! # Lex Policy
//!
//! - `Error` loses to everything.
//! - Accept/accept goes to the token declared earliest in the lexical
//!   grammar. Token priority ties are expected and never logged.
//! - An existing `Accept` is never displaced by anything else.
//!
//! # Threading
//!
//! A manager belongs to one table-construction pass. Parallel builders give
//! each worker its own manager and combine logs with
//! [`merge_conflicts`](crate::merge_conflicts).

use tabula_ir::{PreparedGrammar, RuleNames, Symbol};

use crate::action::{message_for_action, LexAction, ParseAction};
use crate::Conflict;

/// Arbiter between candidate actions, with an append-only conflict log.
#[derive(Clone, Debug)]
pub struct ConflictManager {
    /// Declaration order of syntax rules.
    parse_grammar: PreparedGrammar,
    /// Declaration order of lexical tokens.
    lex_grammar: PreparedGrammar,
    /// Display names for syntax symbols.
    rule_names: RuleNames,
    /// Conflicts in discovery order.
    conflicts: Vec<Conflict>,
}

impl ConflictManager {
    pub fn new(
        parse_grammar: PreparedGrammar,
        lex_grammar: PreparedGrammar,
        rule_names: RuleNames,
    ) -> Self {
        ConflictManager {
            parse_grammar,
            lex_grammar,
            rule_names,
            conflicts: Vec::new(),
        }
    }

    /// Decide whether `new_action` replaces `old_action` in the cell for `symbol`.
    ///
    /// For candidates of different kinds, swapping the arguments always
    /// negates the result, so the cell ends up with the same action whichever
    /// candidate arrived first.
    pub fn resolve_parse_action(
        &mut self,
        symbol: &Symbol,
        old_action: &ParseAction,
        new_action: &ParseAction,
    ) -> bool {
        let replace = if new_action.kind() < old_action.kind() {
            !self.resolve_ordered_parse_action(symbol, new_action, old_action)
        } else {
            self.resolve_ordered_parse_action(symbol, old_action, new_action)
        };

        tracing::trace!(
            %symbol,
            old = %old_action,
            new = %new_action,
            replace,
            "resolved parse action"
        );
        replace
    }

    /// Resolution with `old_action` never outranking `new_action`.
    fn resolve_ordered_parse_action(
        &mut self,
        symbol: &Symbol,
        old_action: &ParseAction,
        new_action: &ParseAction,
    ) -> bool {
        debug_assert!(old_action.kind() <= new_action.kind());

        match (old_action, new_action) {
            (ParseAction::Error, _) => true,
            (ParseAction::Shift { .. }, ParseAction::Shift { .. } | ParseAction::Reduce { .. }) => {
                self.record_conflict(symbol, old_action, new_action);
                false
            }
            (ParseAction::Shift { .. }, ParseAction::Error | ParseAction::Accept) => false,
            (
                ParseAction::Reduce {
                    symbol: old_rule, ..
                },
                ParseAction::Reduce {
                    symbol: new_rule, ..
                },
            ) => {
                self.record_conflict(symbol, old_action, new_action);
                let old_index = declaration_index(&self.parse_grammar, old_rule);
                let new_index = declaration_index(&self.parse_grammar, new_rule);
                new_index < old_index
            }
            (ParseAction::Reduce { .. } | ParseAction::Accept, _) => false,
        }
    }

    /// Decide whether `new_action` replaces `old_action` in a lex table cell.
    pub fn resolve_lex_action(&self, old_action: &LexAction, new_action: &LexAction) -> bool {
        let replace = match (old_action, new_action) {
            (LexAction::Error, _) => true,
            (
                LexAction::Accept {
                    symbol: old_token,
                },
                LexAction::Accept {
                    symbol: new_token,
                },
            ) => {
                let old_index = declaration_index(&self.lex_grammar, old_token);
                let new_index = declaration_index(&self.lex_grammar, new_token);
                new_index < old_index
            }
            (LexAction::Advance { .. } | LexAction::Accept { .. }, _) => false,
        };

        tracing::trace!(
            old = %old_action,
            new = %new_action,
            replace,
            "resolved lex action"
        );
        replace
    }

    fn record_conflict(&mut self, symbol: &Symbol, left: &ParseAction, right: &ParseAction) {
        let symbol_name = if let Some(name) = self.rule_names.get(symbol) {
            name.to_owned()
        } else {
            tracing::warn!(%symbol, "conflict on a symbol without a registered name");
            format!("ERROR {}", symbol.name())
        };

        let conflict = Conflict::new(format!(
            "{symbol_name}: {} / {}",
            message_for_action(left, &self.rule_names),
            message_for_action(right, &self.rule_names),
        ));
        tracing::debug!(%conflict, "recorded conflict");
        self.conflicts.push(conflict);
    }

    /// Every conflict recorded so far, in discovery order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Consume the manager, handing its log to a reporting layer.
    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts
    }

    pub fn parse_grammar(&self) -> &PreparedGrammar {
        &self.parse_grammar
    }

    pub fn lex_grammar(&self) -> &PreparedGrammar {
        &self.lex_grammar
    }

    pub fn rule_names(&self) -> &RuleNames {
        &self.rule_names
    }
}

/// Declaration index of `symbol`, ranking undeclared symbols after all others.
fn declaration_index(grammar: &PreparedGrammar, symbol: &Symbol) -> usize {
    grammar.index_of(symbol).unwrap_or_else(|| {
        tracing::warn!(%symbol, "symbol missing from grammar registry");
        usize::MAX
    })
}
