//! Literal tables for the enumerated value domains.
//!
//! Each table lists the symbols a domain accepts, in a fixed order; an
//! [`EnumLiteral`] is an index into its domain's table. The tables are the
//! single source of truth: parser, builder, and evaluator all go through
//! [`resolve`] and [`symbol`] instead of carrying their own symbol lists.

use stratagem_foundation::{Domain, EnumLiteral};

const AGES: &[&str] = &[
    "DarkAge",
    "FeudalAge",
    "CastleAge",
    "ImperialAge",
    "PostImperialAge",
];

const BUILDINGS: &[&str] = &[
    "ArcheryRange",
    "Barracks",
    "Blacksmith",
    "BombardTower",
    "Castle",
    "Dock",
    "Farm",
    "FishTrap",
    "Gate",
    "GuardTower",
    "House",
    "Keep",
    "LumberCamp",
    "Market",
    "Mill",
    "MiningCamp",
    "Monastery",
    "Outpost",
    "SiegeWorkshop",
    "Stable",
    "TownCenter",
    "University",
    "WatchTower",
    "Wonder",
];

const CIVILIZATIONS: &[&str] = &[
    "Briton",
    "Byzantine",
    "Celtic",
    "Chinese",
    "Frankish",
    "Gothic",
    "Japanese",
    "Mongol",
    "Persian",
    "Saracen",
    "Teutonic",
    "Turkish",
    "Viking",
];

const COMMODITIES: &[&str] = &["Food", "Wood", "Stone", "Gold"];

const DIFFICULTIES: &[&str] = &["Easiest", "Easy", "Moderate", "Hard", "Hardest"];

const DIFFICULTY_PARAMETERS: &[&str] =
    &["AbilityToDodgeMissiles", "AbilityToMaintainDistance"];

const MAP_SIZES: &[&str] = &["Tiny", "Small", "Medium", "Large", "Huge", "Giant"];

const MAP_TYPES: &[&str] = &[
    "Arabia",
    "Archipelago",
    "Baltic",
    "BlackForest",
    "Coastal",
    "Continental",
    "CraterLake",
    "Fortress",
    "GoldRush",
    "Highland",
    "Islands",
    "Mediterranean",
    "Migration",
    "Rivers",
    "TeamIslands",
    "ScenarioMap",
];

const RESEARCH_ITEMS: &[&str] = &[
    "Architecture",
    "Atonement",
    "Ballistics",
    "Banking",
    "BlastFurnace",
    "BodkinArrow",
    "BowSaw",
    "Bracer",
    "Caravan",
    "Cartography",
    "ChainBardingArmor",
    "ChainMailArmor",
    "Chemistry",
    "Coinage",
    "Conscription",
    "CropRotation",
    "DoubleBitAxe",
    "Fervor",
    "Fletching",
    "Forging",
    "GoldMining",
    "GoldShaftMining",
    "Guilds",
    "HandCart",
    "HeavyPlow",
    "HorseCollar",
    "Husbandry",
    "IronCasting",
    "LeatherArcherArmor",
    "Loom",
    "Masonry",
    "PaddedArcherArmor",
    "PlateBardingArmor",
    "PlateMailArmor",
    "Redemption",
    "RingArcherArmor",
    "Sanctity",
    "ScaleBardingArmor",
    "ScaleMailArmor",
    "Squires",
    "StoneMining",
    "StoneShaftMining",
    "ThumbRing",
    "TownPatrol",
    "TownWatch",
    "Tracking",
    "TwoManSaw",
    "Wheelbarrow",
];

const STANCES: &[&str] = &["Ally", "Neutral", "Enemy"];

const STARTING_RESOURCES: &[&str] =
    &["LowResources", "MediumResources", "HighResources"];

const STRATEGIC_NUMBERS: &[&str] = &[
    "SnAttackGroupGatherSpacing",
    "SnCapCivilianExplorers",
    "SnDoNotScaleForDifficultyLevel",
    "SnEnemySightedResponseDistance",
    "SnFoodGathererPercentage",
    "SnGatherDefenseUnits",
    "SnGoldGathererPercentage",
    "SnGroupFormDistance",
    "SnIgnoreAttackGroupUnderAttack",
    "SnInitialExplorationRequired",
    "SnMaximumAttackGroupSize",
    "SnMaximumBoatAttackGroupSize",
    "SnMaximumBoatDefendGroupSize",
    "SnMaximumDefendGroupSize",
    "SnMaximumFishBoatDropDistance",
    "SnMaximumFoodDropDistance",
    "SnMaximumGoldDropDistance",
    "SnMaximumHuntDropDistance",
    "SnMaximumStoneDropDistance",
    "SnMaximumTownSize",
    "SnMaximumWoodDropDistance",
    "SnMinimumAttackGroupSize",
    "SnMinimumBoatAttackGroupSize",
    "SnMinimumBoatDefendGroupSize",
    "SnMinimumDefendGroupSize",
    "SnMinimumPeaceLikeLevel",
    "SnNumberAttackGroups",
    "SnNumberBoatAttackGroups",
    "SnNumberBoatDefendGroups",
    "SnNumberDefendGroups",
    "SnNumberExploreGroups",
    "SnNumberWallGates",
    "SnNumberWallSections",
    "SnPercentAttackBoats",
    "SnPercentAttackSoldiers",
    "SnPercentCivilianExplorers",
    "SnPercentEnemySightedResponse",
    "SnRelicReturnDistance",
    "SnSentryDistance",
    "SnStoneGathererPercentage",
    "SnTargetEvaluationDamageCapability",
    "SnTargetEvaluationDistance",
    "SnTargetEvaluationHitpoints",
    "SnTotalNumberExplorers",
    "SnTownDefendPriority",
    "SnWoodGathererPercentage",
];

const UNITS: &[&str] = &[
    "Arbalest",
    "Archer",
    "BatteringRam",
    "BombardCannon",
    "CamelRider",
    "Cavalier",
    "CavalryArcher",
    "Champion",
    "Crossbowman",
    "DemolitionShip",
    "EliteSkirmisher",
    "FireGalley",
    "FishingShip",
    "Galleon",
    "Galley",
    "HandCannoneer",
    "Knight",
    "LightCavalry",
    "LongSwordsman",
    "ManAtArms",
    "Mangonel",
    "Militia",
    "Monk",
    "Onager",
    "Paladin",
    "Pikeman",
    "Scorpion",
    "ScoutCavalry",
    "Skirmisher",
    "Spearman",
    "TradeCart",
    "TransportShip",
    "Trebuchet",
    "TwoHandedSwordsman",
    "Villager",
    "WarGalley",
];

const VICTORIES: &[&str] = &["Standard", "Conquest", "Score", "TimeLimit", "Custom"];

const WALLS: &[&str] = &["PalisadeWall", "StoneWall", "FortifiedWall"];

/// Returns the literal table for an enumerated domain.
///
/// Scalar domains (`Integer`, `Text`, `Player`) have no table.
#[must_use]
pub fn literals(domain: Domain) -> Option<&'static [&'static str]> {
    Some(match domain {
        Domain::Age => AGES,
        Domain::Building => BUILDINGS,
        Domain::Civilization => CIVILIZATIONS,
        Domain::Commodity => COMMODITIES,
        Domain::Difficulty => DIFFICULTIES,
        Domain::DifficultyParameter => DIFFICULTY_PARAMETERS,
        Domain::MapSize => MAP_SIZES,
        Domain::MapType => MAP_TYPES,
        Domain::Research => RESEARCH_ITEMS,
        Domain::Stance => STANCES,
        Domain::StartingResources => STARTING_RESOURCES,
        Domain::StrategicNumber => STRATEGIC_NUMBERS,
        Domain::Unit => UNITS,
        Domain::Victory => VICTORIES,
        Domain::Wall => WALLS,
        Domain::Integer | Domain::Text | Domain::Player => return None,
    })
}

/// Resolves a symbol within a domain's literal table.
#[must_use]
pub fn resolve(domain: Domain, symbol: &str) -> Option<EnumLiteral> {
    let table = literals(domain)?;
    let index = table.iter().position(|entry| *entry == symbol)?;
    // Tables are far smaller than u16::MAX
    Some(EnumLiteral(u16::try_from(index).ok()?))
}

/// Returns the symbol for a literal of a domain, if it is in range.
#[must_use]
pub fn symbol(domain: Domain, literal: EnumLiteral) -> Option<&'static str> {
    literals(domain)?.get(literal.index()).copied()
}
