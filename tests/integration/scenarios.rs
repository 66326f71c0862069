//! End-to-end scenarios
//!
//! Each test compiles a script and drives ticks against a populated
//! world, checking exactly which commands reach the facade.

use stratagem_catalog::Catalog;
use stratagem_engine::{Evaluator, TableWorld};
use stratagem_foundation::{Domain, ErrorKind, PlayerFilter, PlayerId, Value};
use stratagem_language::compile;

// =============================================================================
// Villager Training
// =============================================================================

#[test]
fn train_villager_when_food_suffices() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let food = catalog.predicate("FoodAmount").unwrap();
    let script = compile("((FoodAmount >= 200) => (Train Villager))").unwrap();
    let evaluator = Evaluator::new(player);

    let mut world = TableWorld::new();
    world.set_fact(player, food, None, Value::Int(250));
    let report = evaluator.tick(&script, &mut world);
    assert_eq!(report.commands_issued, 1);
    assert_eq!(world.issued().len(), 1);
    assert_eq!(world.issued()[0].command.name(), "Train");
    assert_eq!(
        world.issued()[0].args,
        vec![catalog.resolve_enum(Domain::Unit, "Villager").unwrap()]
    );

    world.clear_log();
    world.set_fact(player, food, None, Value::Int(100));
    let report = evaluator.tick(&script, &mut world);
    assert_eq!(report.commands_issued, 0);
    assert!(world.issued().is_empty());
}

// =============================================================================
// Age-Dependent Strategy
// =============================================================================

#[test]
fn early_age_alternatives_fire_identically() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let age = catalog.predicate("CurrentAge").unwrap();
    let script = compile(
        "((Or (CurrentAge == DarkAge) (CurrentAge == FeudalAge))
          => (SetStrategicNumber SnMinimumAttackGroupSize 4))",
    )
    .unwrap();
    let evaluator = Evaluator::new(player);
    let mut world = TableWorld::new();

    for early_age in ["DarkAge", "FeudalAge"] {
        world.set_fact(
            player,
            age,
            None,
            catalog.resolve_enum(Domain::Age, early_age).unwrap(),
        );
        world.clear_log();
        evaluator.tick(&script, &mut world);
        assert_eq!(world.issued().len(), 1, "should fire in {early_age}");
        assert_eq!(world.issued()[0].command.name(), "SetStrategicNumber");
        assert_eq!(world.issued()[0].args[1], Value::Int(4));
    }

    world.set_fact(
        player,
        age,
        None,
        catalog.resolve_enum(Domain::Age, "CastleAge").unwrap(),
    );
    world.clear_log();
    evaluator.tick(&script, &mut world);
    assert!(world.issued().is_empty());
}

// =============================================================================
// Compile-Time Rejection
// =============================================================================

#[test]
fn actionless_rule_never_reaches_the_engine() {
    let err = compile("((FoodAmount >= 1))").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyActionList));
}

// =============================================================================
// Negation Tracks the World
// =============================================================================

#[test]
fn negated_fact_tracks_the_underlying_value() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let valid = catalog.predicate("PlayerValid").unwrap();
    let any_enemy = Value::Player(PlayerFilter::AnyEnemy);
    let script = compile("((Not (PlayerValid AnyEnemy)) => (Resign))").unwrap();
    let evaluator = Evaluator::new(player);
    let mut world = TableWorld::new();

    for (fact, expect_fire) in [(1, false), (0, true), (1, false), (0, true)] {
        world.set_fact(player, valid, Some(any_enemy.clone()), Value::Int(fact));
        world.clear_log();
        let report = evaluator.tick(&script, &mut world);
        assert_eq!(report.rules_fired, usize::from(expect_fire));
    }
}

// =============================================================================
// A Complete Opening
// =============================================================================

#[test]
fn opening_script_progresses_with_the_economy() {
    let player = PlayerId(1);
    let catalog = Catalog::global();
    let script = compile(
        "((FoodAmount >= 50) (UnitTypeCount Villager < 30) => (Train Villager))
         ((WoodAmount >= 175) (BuildingTypeCount LumberCamp < 2) => (Build LumberCamp))
         ((Not TownUnderAttack) (GoldAmount >= 85) => (Train Monk))",
    )
    .unwrap();
    let evaluator = Evaluator::new(player);

    let villager = catalog.resolve_enum(Domain::Unit, "Villager").unwrap();
    let lumber_camp = catalog.resolve_enum(Domain::Building, "LumberCamp").unwrap();
    let unit_count = catalog.predicate("UnitTypeCount").unwrap();
    let building_count = catalog.predicate("BuildingTypeCount").unwrap();
    let food = catalog.predicate("FoodAmount").unwrap();
    let wood = catalog.predicate("WoodAmount").unwrap();
    let gold = catalog.predicate("GoldAmount").unwrap();

    let mut world = TableWorld::new();
    world.set_fact(player, food, None, Value::Int(60));
    world.set_fact(player, wood, None, Value::Int(0));
    world.set_fact(player, gold, None, Value::Int(0));
    world.set_fact(player, unit_count, Some(villager.clone()), Value::Int(3));
    world.set_fact(player, building_count, Some(lumber_camp.clone()), Value::Int(0));

    // Only food available: just the villager rule fires
    let report = evaluator.tick(&script, &mut world);
    assert_eq!(report.rules_fired, 1);
    assert_eq!(world.issued().len(), 1);

    // Wood and gold arrive; TownUnderAttack stays unavailable, which
    // reads as false and lets the negated condition hold
    world.set_fact(player, wood, None, Value::Int(200));
    world.set_fact(player, gold, None, Value::Int(100));
    world.clear_log();
    let report = evaluator.tick(&script, &mut world);
    assert_eq!(report.rules_fired, 3);
    let issued: Vec<_> = world.issued().iter().map(|c| c.command.name()).collect();
    assert_eq!(issued, vec!["Train", "Build", "Train"]);

    // Caps reached: counts at the limits stop the first two rules
    world.set_fact(player, unit_count, Some(villager), Value::Int(30));
    world.set_fact(player, building_count, Some(lumber_camp), Value::Int(2));
    world.clear_log();
    let report = evaluator.tick(&script, &mut world);
    assert_eq!(report.rules_fired, 1);
    assert_eq!(
        world.issued()[0].args,
        vec![catalog.resolve_enum(Domain::Unit, "Monk").unwrap()]
    );
}
