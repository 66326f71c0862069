//! Integration tests for the parser and builder
//!
//! Exercises the full compile pipeline and the diagnostic taxonomy.

use stratagem_foundation::{Domain, ErrorKind, PlayerFilter, Value};
use stratagem_language::{compile, Condition};

// =============================================================================
// Well-Formed Scripts
// =============================================================================

#[test]
fn compile_full_opening_script() {
    let script = compile(
        "; standard opening
         ((FoodAmount >= 50) (PopulationHeadroom > 0) (UnitTypeCount Villager < 30)
          => (Train Villager))
         ((WoodAmount >= 175) (BuildingTypeCount LumberCamp < 2) => (Build LumberCamp))
         ((ResearchAvailable Loom) (CanAffordResearch Loom) => (Research Loom))",
    )
    .unwrap();
    assert_eq!(script.len(), 3);
}

#[test]
fn player_filter_symbols_resolve() {
    let script = compile("((PlayerValid AnyEnemy) => (AttackNow))").unwrap();
    let rule = &script.rules()[0];
    match script.condition(rule.conditions[0]) {
        Condition::Atomic { qualifier, .. } => {
            assert_eq!(*qualifier, Some(Value::Player(PlayerFilter::AnyEnemy)));
        }
        other => panic!("expected atomic, got {other:?}"),
    }
}

#[test]
fn player_numbers_resolve() {
    let script =
        compile("((GoldAmount >= 100) => (TributeToPlayer 2 Gold 100))").unwrap();
    let action = &script.rules()[0].actions[0];
    assert_eq!(action.args[0], Value::Player(PlayerFilter::Number(2)));
    assert_eq!(action.args[2], Value::Int(100));
}

#[test]
fn integer_qualifiers_resolve() {
    let script = compile("((Goal 1 == 0) => (SetGoal 1 1))").unwrap();
    let rule = &script.rules()[0];
    match script.condition(rule.conditions[0]) {
        Condition::Atomic { qualifier, .. } => {
            assert_eq!(*qualifier, Some(Value::Int(1)));
        }
        other => panic!("expected atomic, got {other:?}"),
    }
}

#[test]
fn strategic_number_arguments_resolve() {
    let script = compile(
        "((CurrentAge == FeudalAge) => (SetStrategicNumber SnFoodGathererPercentage 55))",
    )
    .unwrap();
    let action = &script.rules()[0].actions[0];
    assert!(matches!(
        action.args[0],
        Value::Enum(Domain::StrategicNumber, _)
    ));
    assert_eq!(action.args[1], Value::Int(55));
}

// =============================================================================
// Semantic Diagnostics
// =============================================================================

#[test]
fn unknown_predicate() {
    let err = compile("((FoodAmont >= 200) => (Train Villager))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownPredicate(ref s) if s == "FoodAmont"));
}

#[test]
fn unknown_command() {
    let err = compile("((FoodAmount >= 200) => (Trian Villager))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(ref s) if s == "Trian"));
}

#[test]
fn unknown_enum_literal_in_qualifier() {
    let err = compile("((UnitTypeCount Vilager < 20) => (DoNothing))").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnknownEnumLiteral {
            domain: Domain::Unit,
            ..
        }
    ));
}

#[test]
fn missing_qualifier() {
    let err = compile("((UnitTypeCount < 20) => (DoNothing))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::QualifierTypeMismatch { .. }));
}

#[test]
fn qualifier_of_wrong_kind() {
    let err = compile("((UnitTypeCount 5 < 20) => (DoNothing))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::QualifierTypeMismatch { .. }));
}

#[test]
fn comparison_of_wrong_domain() {
    let err = compile("((CurrentAge == 3) => (DoNothing))").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ComparisonTypeMismatch {
            expected: Domain::Age,
            ..
        }
    ));
}

#[test]
fn comparison_on_boolean_predicate() {
    let err = compile("((TownUnderAttack == 1) => (AttackNow))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RelOpNotApplicable { .. }));
}

#[test]
fn arity_mismatch_too_few() {
    let err = compile("((FoodAmount >= 200) => (Train))").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ArityMismatch {
            expected: 1,
            found: 0,
            ..
        }
    ));
}

#[test]
fn arity_mismatch_too_many() {
    let err = compile("((FoodAmount >= 200) => (AttackNow 3))").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ArityMismatch {
            expected: 0,
            found: 1,
            ..
        }
    ));
}

#[test]
fn argument_of_wrong_domain() {
    let err = compile("((FoodAmount >= 200) => (Train 5))").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ArgumentTypeMismatch {
            slot: 0,
            expected: Domain::Unit,
            ..
        }
    ));
}

#[test]
fn negation_of_negation() {
    let err = compile("((Not (Not TownUnderAttack)) => (DoNothing))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NegationOfCompoundCondition));
}

// =============================================================================
// Structural Diagnostics
// =============================================================================

#[test]
fn rule_without_actions() {
    let err = compile("((FoodAmount >= 1))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyActionList));
}

#[test]
fn rule_without_conditions() {
    let err = compile("(=> (AttackNow))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyConditionList));
}

#[test]
fn bare_symbol_outside_rule() {
    let err = compile("FoodAmount").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax(_)));
}

#[test]
fn errors_carry_source_position() {
    let err = compile("((FoodAmount >= 200)\n => (Trian Villager))").unwrap_err();
    let context = err.context.expect("context");
    assert_eq!(context.line, Some(2));
    assert!(context.snippet.unwrap().contains("Trian"));
}

#[test]
fn error_display_includes_position() {
    let err = compile("((FoodAmont >= 200) => (Train Villager))").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("FoodAmont"));
    assert!(rendered.contains("at 1:"));
}
