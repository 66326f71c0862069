//! The command signature table.
//!
//! Every instruction a script can issue is one row here: its symbol and its
//! ordered parameter domains (zero to four slots).

use stratagem_foundation::Domain;

/// Handle for a command, indexing the signature table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandId(pub(crate) u16);

impl CommandId {
    /// Returns the table index of this command.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the signature of this command.
    #[must_use]
    pub fn sig(self) -> &'static CommandSig {
        &COMMANDS[self.index()]
    }

    /// Returns the command's symbol as written in script text.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.sig().name
    }
}

/// Signature of one command.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandSig {
    /// Symbol as written in script text.
    pub name: &'static str,
    /// Ordered parameter domains.
    pub params: &'static [Domain],
}

const fn sig(name: &'static str, params: &'static [Domain]) -> CommandSig {
    CommandSig { name, params }
}

use Domain::{
    Building, Commodity, DifficultyParameter, Integer, Player, Research, Stance,
    StrategicNumber, Text, Unit, Wall,
};

/// All commands, one row each, sorted by symbol.
pub(crate) const COMMANDS: &[CommandSig] = &[
    sig("AcknowledgeEvent", &[Integer, Integer]),
    sig("AcknowledgeTaunt", &[Player, Integer]),
    sig("AttackNow", &[]),
    sig("Build", &[Building]),
    sig("BuildForward", &[Building]),
    sig("BuildGate", &[Integer]),
    sig("BuildWall", &[Integer, Wall]),
    sig("BuyCommodity", &[Commodity]),
    sig("ChatLocal", &[Text]),
    sig("ChatLocalToSelf", &[Text]),
    sig("ChatLocalUsingId", &[Integer]),
    sig("ChatLocalUsingRange", &[Integer, Integer]),
    sig("ChatToAll", &[Text]),
    sig("ChatToAllUsingId", &[Integer]),
    sig("ChatToAllUsingRange", &[Integer, Integer]),
    sig("ChatToAllies", &[Text]),
    sig("ChatToAlliesUsingId", &[Integer]),
    sig("ChatToAlliesUsingRange", &[Integer, Integer]),
    sig("ChatToEnemies", &[Text]),
    sig("ChatToEnemiesUsingId", &[Integer]),
    sig("ChatToEnemiesUsingRange", &[Integer, Integer]),
    sig("ChatToPlayer", &[Player, Text]),
    sig("ChatToPlayerUsingId", &[Player, Integer]),
    sig("ChatToPlayerUsingRange", &[Player, Integer, Integer]),
    sig("ChatTrace", &[Integer]),
    sig("ClearTributeMemory", &[Player, Commodity]),
    sig("DeleteBuilding", &[Building]),
    sig("DeleteUnit", &[Unit]),
    sig("DisableSelf", &[]),
    sig("DisableTimer", &[Integer]),
    sig("DoNothing", &[]),
    sig("EnableTimer", &[Integer, Integer]),
    sig("EnableWallPlacement", &[Integer]),
    sig("GenerateRandomNumber", &[Integer]),
    sig("Log", &[Text]),
    sig("LogTrace", &[Integer]),
    sig("ReleaseEscrow", &[Commodity]),
    sig("Research", &[Research]),
    sig("Resign", &[]),
    sig("SellCommodity", &[Commodity]),
    sig("SetDifficultyParameter", &[DifficultyParameter, Integer]),
    sig("SetEscrowPercentage", &[Commodity, Integer]),
    sig("SetGoal", &[Integer, Integer]),
    sig("SetSharedGoal", &[Integer, Integer]),
    sig("SetSignal", &[Integer]),
    sig("SetStance", &[Player, Stance]),
    sig("SetStrategicNumber", &[StrategicNumber, Integer]),
    sig("Spy", &[]),
    sig("Taunt", &[Integer]),
    sig("TauntUsingRange", &[Integer, Integer]),
    sig("Train", &[Unit]),
    sig("TributeToPlayer", &[Player, Commodity, Integer]),
];
