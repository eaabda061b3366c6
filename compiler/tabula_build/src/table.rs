//! Parse and lex table cell storage.
//!
//! These containers only hold actions. Whoever computes the automaton
//! proposes candidates through `set_action`; an occupied cell asks the
//! [`ConflictManager`] whether the candidate takes over.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tabula_ir::Symbol;

use crate::{ConflictManager, LexAction, ParseAction, StateId};

/// Actions of one parse automaton state, keyed by lookahead symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseState {
    actions: FxHashMap<Symbol, ParseAction>,
}

impl ParseState {
    /// Propose `action` for the cell keyed by `symbol`.
    ///
    /// Returns `true` if the cell holds `action` afterwards.
    #[tracing::instrument(level = "trace", skip_all, fields(symbol = %symbol, action = %action))]
    pub fn set_action(
        &mut self,
        symbol: Symbol,
        action: ParseAction,
        manager: &mut ConflictManager,
    ) -> bool {
        match self.actions.entry(symbol) {
            Entry::Vacant(cell) => {
                cell.insert(action);
                true
            }
            Entry::Occupied(mut cell) => {
                if manager.resolve_parse_action(cell.key(), cell.get(), &action) {
                    cell.insert(action);
                    true
                } else {
                    false
                }
            }
        }
    }

    #[inline]
    pub fn action(&self, symbol: &Symbol) -> Option<&ParseAction> {
        self.actions.get(symbol)
    }

    /// Cells sorted by symbol, for deterministic output.
    pub fn sorted_actions(&self) -> Vec<(&Symbol, &ParseAction)> {
        let mut actions: Vec<_> = self.actions.iter().collect();
        actions.sort_by(|(a, _), (b, _)| a.cmp(b));
        actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Parse table: one [`ParseState`] per automaton state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseTable {
    states: Vec<ParseState>,
}

impl ParseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty state and return its id.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(ParseState::default());
        id
    }

    #[inline]
    pub fn state(&self, id: StateId) -> Option<&ParseState> {
        self.states.get(id.index())
    }

    #[inline]
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut ParseState> {
        self.states.get_mut(id.index())
    }

    pub fn states(&self) -> &[ParseState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Actions of one lex automaton state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexState {
    actions: FxHashMap<char, LexAction>,
    /// Taken when no character cell matches.
    default_action: LexAction,
}

impl Default for LexState {
    fn default() -> Self {
        LexState {
            actions: FxHashMap::default(),
            default_action: LexAction::Error,
        }
    }
}

impl LexState {
    /// Propose `action` for the cell keyed by `character`.
    ///
    /// Returns `true` if the cell holds `action` afterwards.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(character = ?character, action = %action)
    )]
    pub fn set_action(
        &mut self,
        character: char,
        action: LexAction,
        manager: &ConflictManager,
    ) -> bool {
        match self.actions.entry(character) {
            Entry::Vacant(cell) => {
                cell.insert(action);
                true
            }
            Entry::Occupied(mut cell) => {
                if manager.resolve_lex_action(cell.get(), &action) {
                    cell.insert(action);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Propose `action` as the state's default.
    ///
    /// Returns `true` if the default is `action` afterwards.
    #[tracing::instrument(level = "trace", skip_all, fields(action = %action))]
    pub fn set_default_action(&mut self, action: LexAction, manager: &ConflictManager) -> bool {
        if manager.resolve_lex_action(&self.default_action, &action) {
            self.default_action = action;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn action(&self, character: char) -> Option<&LexAction> {
        self.actions.get(&character)
    }

    pub fn default_action(&self) -> &LexAction {
        &self.default_action
    }

    /// Cells sorted by character, for deterministic output.
    pub fn sorted_actions(&self) -> Vec<(char, &LexAction)> {
        let mut actions: Vec<_> = self
            .actions
            .iter()
            .map(|(character, action)| (*character, action))
            .collect();
        actions.sort_by_key(|(character, _)| *character);
        actions
    }
}

/// Lex table: one [`LexState`] per automaton state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexTable {
    states: Vec<LexState>,
}

impl LexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty state and return its id.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(LexState::default());
        id
    }

    #[inline]
    pub fn state(&self, id: StateId) -> Option<&LexState> {
        self.states.get(id.index())
    }

    #[inline]
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut LexState> {
        self.states.get_mut(id.index())
    }

    pub fn states(&self) -> &[LexState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
