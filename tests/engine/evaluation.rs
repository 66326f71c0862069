//! Evaluation integration tests
//!
//! Tests the full pipeline: compile a script, run ticks against a
//! populated world, observe what the facade receives.

use stratagem_catalog::Catalog;
use stratagem_engine::{Evaluator, TableWorld};
use stratagem_foundation::{Domain, PlayerId, Value};
use stratagem_language::compile;

fn set_int(world: &mut TableWorld, player: PlayerId, predicate: &str, amount: i64) {
    let id = Catalog::global().predicate(predicate).unwrap();
    world.set_fact(player, id, None, Value::Int(amount));
}

// =============================================================================
// Rule Ordering
// =============================================================================

#[test]
fn all_matching_rules_fire_in_file_order() {
    let player = PlayerId(1);
    let script = compile(
        "((FoodAmount >= 50) => (Train Villager))
         ((WoodAmount >= 175) => (Build LumberCamp))
         ((FoodAmount >= 50) (WoodAmount >= 175) => (AttackNow))",
    )
    .unwrap();

    let mut world = TableWorld::new();
    set_int(&mut world, player, "FoodAmount", 100);
    set_int(&mut world, player, "WoodAmount", 200);

    let report = Evaluator::new(player).tick(&script, &mut world);
    assert_eq!(report.rules_fired, 3);

    let issued: Vec<_> = world.issued().iter().map(|c| c.command.name()).collect();
    assert_eq!(issued, vec!["Train", "Build", "AttackNow"]);
}

#[test]
fn actions_within_a_rule_run_in_order() {
    let player = PlayerId(1);
    let script = compile(
        "((FoodAmount >= 50) => (SetGoal 1 1) (Train Villager) (SetGoal 2 1))",
    )
    .unwrap();

    let mut world = TableWorld::new();
    set_int(&mut world, player, "FoodAmount", 100);

    Evaluator::new(player).tick(&script, &mut world);
    let issued: Vec<_> = world.issued().iter().map(|c| c.command.name()).collect();
    assert_eq!(issued, vec!["SetGoal", "Train", "SetGoal"]);
}

// =============================================================================
// Condition Forms
// =============================================================================

#[test]
fn or_condition_fires_on_either_branch() {
    let player = PlayerId(1);
    let script = compile(
        "((Or (FoodAmount >= 500) (WoodAmount >= 500)) => (AttackNow))",
    )
    .unwrap();
    let evaluator = Evaluator::new(player);

    let mut world = TableWorld::new();
    set_int(&mut world, player, "FoodAmount", 600);
    set_int(&mut world, player, "WoodAmount", 0);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);

    set_int(&mut world, player, "FoodAmount", 0);
    set_int(&mut world, player, "WoodAmount", 600);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);

    set_int(&mut world, player, "WoodAmount", 0);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 0);
}

#[test]
fn bare_predicate_uses_truthiness() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let script = compile("(TownUnderAttack => (AttackNow))").unwrap();
    let evaluator = Evaluator::new(player);
    let under_attack = catalog.predicate("TownUnderAttack").unwrap();

    let mut world = TableWorld::new();
    world.set_fact(player, under_attack, None, Value::Int(0));
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 0);

    world.set_fact(player, under_attack, None, Value::Int(1));
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);
}

#[test]
fn enum_equality_against_world_state() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let script = compile("((CurrentAge == FeudalAge) => (AttackNow))").unwrap();
    let evaluator = Evaluator::new(player);
    let age = catalog.predicate("CurrentAge").unwrap();

    let mut world = TableWorld::new();
    world.set_fact(
        player,
        age,
        None,
        catalog.resolve_enum(Domain::Age, "DarkAge").unwrap(),
    );
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 0);

    world.set_fact(
        player,
        age,
        None,
        catalog.resolve_enum(Domain::Age, "FeudalAge").unwrap(),
    );
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);
}

#[test]
fn qualified_fact_flows_to_the_facade() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let script = compile("((UnitTypeCount Villager < 20) => (Train Villager))").unwrap();
    let count = catalog.predicate("UnitTypeCount").unwrap();
    let villager = catalog.resolve_enum(Domain::Unit, "Villager").unwrap();

    let mut world = TableWorld::new();
    world.set_fact(player, count, Some(villager.clone()), Value::Int(12));
    let report = Evaluator::new(player).tick(&script, &mut world);
    assert_eq!(report.rules_fired, 1);
    assert_eq!(world.issued()[0].args, vec![villager.clone()]);

    world.set_fact(player, count, Some(villager), Value::Int(20));
    world.clear_log();
    let report = Evaluator::new(player).tick(&script, &mut world);
    assert_eq!(report.rules_fired, 0);
}

// =============================================================================
// Statelessness Across Ticks
// =============================================================================

#[test]
fn tick_result_depends_only_on_current_facts() {
    let player = PlayerId(1);
    let script = compile("((FoodAmount >= 200) => (Train Villager))").unwrap();
    let evaluator = Evaluator::new(player);
    let mut world = TableWorld::new();

    set_int(&mut world, player, "FoodAmount", 250);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);

    set_int(&mut world, player, "FoodAmount", 100);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 0);

    set_int(&mut world, player, "FoodAmount", 250);
    assert_eq!(evaluator.tick(&script, &mut world).rules_fired, 1);
}
