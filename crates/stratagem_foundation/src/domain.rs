//! Value domains for typed argument slots.
//!
//! Every qualifier, comparison value, and command argument belongs to a
//! `Domain`. Scalar domains (`Integer`, `Text`, `Player`) accept literal
//! tokens directly; enumerated domains accept only the symbols listed in
//! the catalog's literal tables.

use std::fmt;

/// The domain of a value slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// Signed integer literal.
    Integer,
    /// Quoted string literal.
    Text,
    /// Player selector symbol or literal player number.
    Player,
    /// Age stage (`DarkAge`, `FeudalAge`, ...).
    Age,
    /// Building kind.
    Building,
    /// Civilization.
    Civilization,
    /// Tradable commodity (`Food`, `Wood`, `Stone`, `Gold`).
    Commodity,
    /// Difficulty level.
    Difficulty,
    /// Named difficulty tunable.
    DifficultyParameter,
    /// Map size.
    MapSize,
    /// Map type.
    MapType,
    /// Research item.
    Research,
    /// Diplomatic stance.
    Stance,
    /// Starting resource level.
    StartingResources,
    /// Named strategic tunable (`SnMinimumAttackGroupSize`, ...).
    StrategicNumber,
    /// Unit kind.
    Unit,
    /// Victory condition.
    Victory,
    /// Wall kind.
    Wall,
}

impl Domain {
    /// Returns true if this domain is an enumerated symbol domain.
    #[must_use]
    pub const fn is_enumerated(self) -> bool {
        !matches!(self, Self::Integer | Self::Text | Self::Player)
    }

    /// Returns a human-readable name for this domain.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Text => "string",
            Self::Player => "player",
            Self::Age => "age",
            Self::Building => "building",
            Self::Civilization => "civilization",
            Self::Commodity => "commodity",
            Self::Difficulty => "difficulty",
            Self::DifficultyParameter => "difficulty-parameter",
            Self::MapSize => "map-size",
            Self::MapType => "map-type",
            Self::Research => "research",
            Self::Stance => "stance",
            Self::StartingResources => "starting-resources",
            Self::StrategicNumber => "strategic-number",
            Self::Unit => "unit",
            Self::Victory => "victory",
            Self::Wall => "wall",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
