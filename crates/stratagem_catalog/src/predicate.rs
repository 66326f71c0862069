//! The predicate signature table.
//!
//! Every world-state fact a script can query is one row here: its symbol,
//! its optional qualifier domain, and its optional comparison domain. A
//! predicate with no comparison domain is a bare boolean fact.

use stratagem_foundation::Domain;

/// Handle for a predicate, indexing the signature table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredicateId(pub(crate) u16);

impl PredicateId {
    /// Returns the table index of this predicate.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the signature of this predicate.
    #[must_use]
    pub fn sig(self) -> &'static PredicateSig {
        &PREDICATES[self.index()]
    }

    /// Returns the predicate's symbol as written in script text.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.sig().name
    }
}

/// Signature of one predicate.
#[derive(Debug, PartialEq, Eq)]
pub struct PredicateSig {
    /// Symbol as written in script text.
    pub name: &'static str,
    /// Domain of the qualifier argument, if the predicate takes one.
    pub qualifier: Option<Domain>,
    /// Domain of the comparison value; `None` for bare boolean facts.
    pub comparison: Option<Domain>,
}

const fn sig(
    name: &'static str,
    qualifier: Option<Domain>,
    comparison: Option<Domain>,
) -> PredicateSig {
    PredicateSig {
        name,
        qualifier,
        comparison,
    }
}

const INT: Option<Domain> = Some(Domain::Integer);
const PLAYER: Option<Domain> = Some(Domain::Player);

/// All predicates, one row each. Rows are sorted by symbol; the lookup map
/// in [`crate::Catalog`] is built from this table at startup.
pub(crate) const PREDICATES: &[PredicateSig] = &[
    sig("AttackSoldierCount", None, INT),
    sig("AttackWarboatCount", None, INT),
    sig("BuildingAvailable", Some(Domain::Building), None),
    sig("BuildingCount", None, INT),
    sig("BuildingCountTotal", None, INT),
    sig("BuildingTypeCount", Some(Domain::Building), INT),
    sig("BuildingTypeCountTotal", Some(Domain::Building), INT),
    sig("CanAffordBuilding", Some(Domain::Building), None),
    sig("CanAffordResearch", Some(Domain::Research), None),
    sig("CanAffordUnit", Some(Domain::Unit), None),
    sig("CanBuild", Some(Domain::Building), None),
    sig("CanBuildGate", INT, None),
    sig("CanBuildWall", Some(Domain::Wall), None),
    sig("CanResearch", Some(Domain::Research), None),
    sig("CanTrain", Some(Domain::Unit), None),
    sig("CheatsEnabled", None, None),
    sig("CivSelected", Some(Domain::Civilization), None),
    sig("CivilianPopulation", None, INT),
    sig("CommodityBuyingPrice", Some(Domain::Commodity), INT),
    sig("CommoditySellingPrice", Some(Domain::Commodity), INT),
    sig("CurrentAge", None, Some(Domain::Age)),
    sig("CurrentAgeTime", None, INT),
    sig("CurrentScore", None, INT),
    sig("DeathMatchGame", None, None),
    sig("DefendSoldierCount", None, INT),
    sig("DefendWarboatCount", None, INT),
    sig("Difficulty", None, Some(Domain::Difficulty)),
    sig("DropsiteMinDistance", Some(Domain::Commodity), INT),
    sig("EnemyBuildingsInTown", None, None),
    sig("EnemyCapturedRelics", None, None),
    sig("EscrowAmount", Some(Domain::Commodity), INT),
    sig("EventDetected", INT, None),
    sig("False", None, None),
    sig("FoodAmount", None, INT),
    sig("GameTime", None, INT),
    sig("Goal", INT, INT),
    sig("GoldAmount", None, INT),
    sig("HousingHeadroom", None, INT),
    sig("IdleFarmCount", None, INT),
    sig("MapSize", None, Some(Domain::MapSize)),
    sig("MapType", None, Some(Domain::MapType)),
    sig("MilitaryPopulation", None, INT),
    sig("PlayerComputer", PLAYER, None),
    sig("PlayerHuman", PLAYER, None),
    sig("PlayerInGame", PLAYER, None),
    sig("PlayerNumber", PLAYER, None),
    sig("PlayerResigned", PLAYER, None),
    sig("PlayerValid", PLAYER, None),
    sig("PlayersBuildingCount", PLAYER, INT),
    sig("PlayersCivilianPopulation", PLAYER, INT),
    sig("PlayersCivilization", PLAYER, Some(Domain::Civilization)),
    sig("PlayersCurrentAge", PLAYER, Some(Domain::Age)),
    sig("PlayersCurrentAgeTime", PLAYER, INT),
    sig("PlayersMilitaryPopulation", PLAYER, INT),
    sig("PlayersPopulation", PLAYER, INT),
    sig("PlayersScore", PLAYER, INT),
    sig("PlayersStance", PLAYER, Some(Domain::Stance)),
    sig("PlayersTribute", PLAYER, INT),
    sig("PlayersUnitCount", PLAYER, INT),
    sig("Population", None, INT),
    sig("PopulationCap", None, INT),
    sig("PopulationHeadroom", None, INT),
    sig("RandomNumber", None, INT),
    sig("RegicideGame", None, None),
    sig("ResearchAvailable", Some(Domain::Research), None),
    sig("ResearchCompleted", Some(Domain::Research), None),
    sig("ResourceFound", Some(Domain::Commodity), None),
    sig("SharedGoal", INT, INT),
    sig("SheepAndForageTooFar", None, None),
    sig("SoldierCount", None, INT),
    sig("StanceToward", PLAYER, Some(Domain::Stance)),
    sig("StartingAge", None, Some(Domain::Age)),
    sig("StartingResources", None, Some(Domain::StartingResources)),
    sig("StoneAmount", None, INT),
    sig("StrategicNumber", Some(Domain::StrategicNumber), INT),
    sig("TauntDetected", PLAYER, INT),
    sig("TimerTriggered", INT, None),
    sig("TownUnderAttack", None, None),
    sig("True", None, None),
    sig("UnitAvailable", Some(Domain::Unit), None),
    sig("UnitCount", None, INT),
    sig("UnitCountTotal", None, INT),
    sig("UnitTypeCount", Some(Domain::Unit), INT),
    sig("UnitTypeCountTotal", Some(Domain::Unit), INT),
    sig("VictoryCondition", None, Some(Domain::Victory)),
    sig("WallCompletedPercentage", Some(Domain::Wall), INT),
    sig("WallInvisiblePercentage", Some(Domain::Wall), INT),
    sig("WarboatCount", None, INT),
    sig("WoodAmount", None, INT),
];
