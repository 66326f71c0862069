//! Participant identity and player selectors.

use std::fmt;

/// Identity of one AI-controlled participant.
///
/// Each evaluator acts on behalf of exactly one participant; the world
/// facade keys every fact read and command invocation by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A player selector appearing in script text.
///
/// `Any*` selectors match if at least one player of that relation satisfies
/// the fact; `Every*` selectors require all of them. A bare number selects
/// one concrete player slot. Which players fall under each relation is the
/// world facade's knowledge, not the engine's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerFilter {
    /// Any allied player.
    AnyAlly,
    /// Any computer player.
    AnyComputer,
    /// Any allied computer player.
    AnyComputerAlly,
    /// Any enemy computer player.
    AnyComputerEnemy,
    /// Any neutral computer player.
    AnyComputerNeutral,
    /// Any enemy player.
    AnyEnemy,
    /// Any human player.
    AnyHuman,
    /// Any allied human player.
    AnyHumanAlly,
    /// Any enemy human player.
    AnyHumanEnemy,
    /// Any neutral human player.
    AnyHumanNeutral,
    /// Any neutral player.
    AnyNeutral,
    /// Every allied player.
    EveryAlly,
    /// Every computer player.
    EveryComputer,
    /// Every enemy player.
    EveryEnemy,
    /// Every human player.
    EveryHuman,
    /// Every neutral player.
    EveryNeutral,
    /// One concrete player slot (1-based).
    Number(u8),
}

impl PlayerFilter {
    /// Resolves a selector symbol as written in script text.
    ///
    /// Literal player numbers are lexed as integers, not symbols, and are
    /// converted with [`PlayerFilter::Number`] directly.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "AnyAlly" => Self::AnyAlly,
            "AnyComputer" => Self::AnyComputer,
            "AnyComputerAlly" => Self::AnyComputerAlly,
            "AnyComputerEnemy" => Self::AnyComputerEnemy,
            "AnyComputerNeutral" => Self::AnyComputerNeutral,
            "AnyEnemy" => Self::AnyEnemy,
            "AnyHuman" => Self::AnyHuman,
            "AnyHumanAlly" => Self::AnyHumanAlly,
            "AnyHumanEnemy" => Self::AnyHumanEnemy,
            "AnyHumanNeutral" => Self::AnyHumanNeutral,
            "AnyNeutral" => Self::AnyNeutral,
            "EveryAlly" => Self::EveryAlly,
            "EveryComputer" => Self::EveryComputer,
            "EveryEnemy" => Self::EveryEnemy,
            "EveryHuman" => Self::EveryHuman,
            "EveryNeutral" => Self::EveryNeutral,
            _ => return None,
        })
    }

    /// Returns the selector symbol as written in script text.
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        Some(match self {
            Self::AnyAlly => "AnyAlly",
            Self::AnyComputer => "AnyComputer",
            Self::AnyComputerAlly => "AnyComputerAlly",
            Self::AnyComputerEnemy => "AnyComputerEnemy",
            Self::AnyComputerNeutral => "AnyComputerNeutral",
            Self::AnyEnemy => "AnyEnemy",
            Self::AnyHuman => "AnyHuman",
            Self::AnyHumanAlly => "AnyHumanAlly",
            Self::AnyHumanEnemy => "AnyHumanEnemy",
            Self::AnyHumanNeutral => "AnyHumanNeutral",
            Self::AnyNeutral => "AnyNeutral",
            Self::EveryAlly => "EveryAlly",
            Self::EveryComputer => "EveryComputer",
            Self::EveryEnemy => "EveryEnemy",
            Self::EveryHuman => "EveryHuman",
            Self::EveryNeutral => "EveryNeutral",
            Self::Number(_) => return None,
        })
    }
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(s) => f.write_str(s),
            None => match self {
                Self::Number(n) => write!(f, "{n}"),
                _ => unreachable!("non-numeric selectors have symbols"),
            },
        }
    }
}
