//! Property-based tests for conflict resolution.
//!
//! These tests use proptest to generate random candidate pairs and verify:
//! 1. Order independence: swapping candidates negates the decision
//! 2. Error always loses, Shift always beats Reduce
//! 3. Earliest declaration wins reduce/reduce and token ties
//! 4. Exactly the diagnosable pairs grow the conflict log
//! 5. A table cell ends up with the same action whichever candidate came first

#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use tabula_build::{
    ConflictManager, LexAction, ParseAction, ParseActionKind, ParseState, StateId,
};
use tabula_ir::{PreparedGrammar, RuleNames, Symbol};

const RULE_COUNT: u32 = 4;
const TOKEN_COUNT: u32 = 4;

// -- Fixtures --

fn rule(index: u32) -> Symbol {
    Symbol::rule(index, format!("rule_{index}"))
}

fn token(index: u32) -> Symbol {
    Symbol::token(index, format!("token_{index}"))
}

fn rule_declaration_index(index: u32) -> u32 {
    RULE_COUNT - 1 - index
}

/// Rules are declared in reverse index order so that declaration order and
/// symbol index disagree.
fn manager() -> ConflictManager {
    let Ok(syntax) = PreparedGrammar::new((0..RULE_COUNT).rev().map(rule)) else {
        panic!("syntax grammar must build");
    };
    let Ok(lexical) = PreparedGrammar::new((0..TOKEN_COUNT).map(token)) else {
        panic!("lexical grammar must build");
    };
    let rule_names: RuleNames = (0..RULE_COUNT)
        .map(|index| (rule(index), format!("name_{index}")))
        .collect();
    ConflictManager::new(syntax, lexical, rule_names)
}

fn contested() -> Symbol {
    rule(0)
}

// -- Strategies --

fn parse_action_strategy() -> impl Strategy<Value = ParseAction> {
    prop_oneof![
        Just(ParseAction::Error),
        (0..16u32).prop_map(|state| ParseAction::shift(StateId::new(state))),
        (0..RULE_COUNT, 0..4usize)
            .prop_map(|(index, count)| ParseAction::reduce(rule(index), count)),
        Just(ParseAction::Accept),
    ]
}

fn concrete_parse_action_strategy() -> impl Strategy<Value = ParseAction> {
    parse_action_strategy().prop_filter("not an error", |action| {
        action.kind() != ParseActionKind::Error
    })
}

fn lex_action_strategy() -> impl Strategy<Value = LexAction> {
    prop_oneof![
        Just(LexAction::Error),
        (0..16u32).prop_map(|state| LexAction::advance(StateId::new(state))),
        (0..TOKEN_COUNT).prop_map(|index| LexAction::accept(token(index))),
    ]
}

/// Pairs where the policy yields a strict preference.
fn is_strictly_ordered(a: &ParseAction, b: &ParseAction) -> bool {
    match (a, b) {
        (ParseAction::Reduce { symbol: x, .. }, ParseAction::Reduce { symbol: y, .. }) => x != y,
        _ => a.kind() != b.kind(),
    }
}

/// Pairs the manager logs as conflicts.
fn is_diagnosable(a: &ParseAction, b: &ParseAction) -> bool {
    let mut kinds = [a.kind(), b.kind()];
    kinds.sort();
    matches!(
        kinds,
        [ParseActionKind::Shift, ParseActionKind::Shift | ParseActionKind::Reduce]
            | [ParseActionKind::Reduce, ParseActionKind::Reduce]
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn swapping_candidates_negates_decision(a in parse_action_strategy(), b in parse_action_strategy()) {
        prop_assume!(is_strictly_ordered(&a, &b));
        let mut manager = manager();
        let forward = manager.resolve_parse_action(&contested(), &a, &b);
        let backward = manager.resolve_parse_action(&contested(), &b, &a);
        prop_assert_eq!(forward, !backward);
    }

    #[test]
    fn error_always_loses(action in concrete_parse_action_strategy()) {
        let mut manager = manager();
        prop_assert!(manager.resolve_parse_action(&contested(), &ParseAction::Error, &action));
        prop_assert!(!manager.resolve_parse_action(&contested(), &action, &ParseAction::Error));
        prop_assert!(manager.conflicts().is_empty());
    }

    #[test]
    fn shift_beats_any_reduce(state in 0..16u32, index in 0..RULE_COUNT, count in 0..4usize) {
        let mut manager = manager();
        let shift = ParseAction::shift(StateId::new(state));
        let reduce = ParseAction::reduce(rule(index), count);
        prop_assert!(!manager.resolve_parse_action(&contested(), &shift, &reduce));
        prop_assert!(manager.resolve_parse_action(&contested(), &reduce, &shift));
    }

    #[test]
    fn earliest_declared_rule_wins(a in 0..RULE_COUNT, b in 0..RULE_COUNT) {
        prop_assume!(a != b);
        let mut manager = manager();
        let replace = manager.resolve_parse_action(
            &contested(),
            &ParseAction::reduce(rule(a), 1),
            &ParseAction::reduce(rule(b), 1),
        );
        prop_assert_eq!(replace, rule_declaration_index(b) < rule_declaration_index(a));
    }

    #[test]
    fn earliest_declared_token_wins(a in 0..TOKEN_COUNT, b in 0..TOKEN_COUNT) {
        let manager = manager();
        let replace = manager.resolve_lex_action(
            &LexAction::accept(token(a)),
            &LexAction::accept(token(b)),
        );
        prop_assert_eq!(replace, b < a);
    }

    #[test]
    fn lex_accept_never_displaced_by_other_kinds(index in 0..TOKEN_COUNT, candidate in lex_action_strategy()) {
        prop_assume!(!matches!(candidate, LexAction::Accept { .. }));
        let manager = manager();
        prop_assert!(!manager.resolve_lex_action(&LexAction::accept(token(index)), &candidate));
    }

    #[test]
    fn only_diagnosable_pairs_are_logged(a in parse_action_strategy(), b in parse_action_strategy()) {
        let mut manager = manager();
        manager.resolve_parse_action(&contested(), &a, &b);
        let expected = usize::from(is_diagnosable(&a, &b));
        prop_assert_eq!(manager.conflicts().len(), expected);
        if let Some(conflict) = manager.conflicts().first() {
            prop_assert!(conflict.message().starts_with("name_0: "));
        }
    }

    #[test]
    fn cell_outcome_independent_of_arrival(a in parse_action_strategy(), b in parse_action_strategy()) {
        prop_assume!(is_strictly_ordered(&a, &b));
        let cell = token(0);

        let mut forward_manager = manager();
        let mut forward = ParseState::default();
        forward.set_action(cell.clone(), a.clone(), &mut forward_manager);
        forward.set_action(cell.clone(), b.clone(), &mut forward_manager);

        let mut backward_manager = manager();
        let mut backward = ParseState::default();
        backward.set_action(cell.clone(), b, &mut backward_manager);
        backward.set_action(cell.clone(), a, &mut backward_manager);

        prop_assert_eq!(forward.action(&cell), backward.action(&cell));
        prop_assert_eq!(forward_manager.conflicts().len(), backward_manager.conflicts().len());
    }
}
