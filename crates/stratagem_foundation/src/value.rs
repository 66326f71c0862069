//! Script values and relational operators.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::domain::Domain;
use crate::player::PlayerFilter;

/// Ordinal of a symbol within its domain's literal table.
///
/// Enumerated values are stored as small handles into the catalog's
/// per-domain literal tables rather than as strings; the catalog maps them
/// back to their symbols for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumLiteral(pub u16);

impl EnumLiteral {
    /// Returns the ordinal as a table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A literal value carried by a qualifier, comparison, or command argument.
///
/// Values are immutable and cheaply cloneable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// A member of an enumerated domain.
    Enum(Domain, EnumLiteral),
    /// String value.
    Text(Arc<str>),
    /// Player selector.
    Player(PlayerFilter),
}

impl Value {
    /// Creates a text value.
    #[must_use]
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Self::Text(s.into())
    }

    /// Returns the domain this value belongs to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Int(_) => Domain::Integer,
            Self::Enum(domain, _) => *domain,
            Self::Text(_) => Domain::Text,
            Self::Player(_) => Domain::Player,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract an enumerated value.
    #[must_use]
    pub const fn as_enum(&self) -> Option<(Domain, EnumLiteral)> {
        match self {
            Self::Enum(domain, literal) => Some((*domain, *literal)),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a player selector.
    #[must_use]
    pub const fn as_player(&self) -> Option<PlayerFilter> {
        match self {
            Self::Player(filter) => Some(*filter),
            _ => None,
        }
    }

    /// Returns the truth value of a fact read without a comparison.
    ///
    /// Integer facts are true when non-zero; everything else reports true
    /// by its presence.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
            Self::Enum(..) | Self::Player(_) => true,
        }
    }

    /// Applies a relational operator between this value and another.
    ///
    /// Integers support the full ordering table; enumerated values of the
    /// same domain support only `==` and `!=`. Every other pairing has no
    /// defined comparison and returns `None`.
    #[must_use]
    pub fn compare(&self, op: RelOp, other: &Self) -> Option<bool> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(op.holds_for(a.cmp(b))),
            (Self::Enum(da, a), Self::Enum(db, b)) if da == db => match op {
                RelOp::Equal => Some(a == b),
                RelOp::NotEqual => Some(a != b),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Enum(domain, literal) => write!(f, "{domain}#{}", literal.0),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Player(filter) => write!(f, "{filter}"),
        }
    }
}

/// A relational comparison operator inside an atomic condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelOp {
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl RelOp {
    /// Resolves an operator symbol as written in script text.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "<" => Self::Less,
            "<=" => Self::LessOrEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterOrEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            _ => return None,
        })
    }

    /// Returns the operator symbol as written in script text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Returns true if this operator is `==` or `!=`.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    /// Returns whether this operator holds for an ordering between two
    /// values.
    #[must_use]
    pub const fn holds_for(self, ordering: Ordering) -> bool {
        match self {
            Self::Less => matches!(ordering, Ordering::Less),
            Self::LessOrEqual => !matches!(ordering, Ordering::Greater),
            Self::Greater => matches!(ordering, Ordering::Greater),
            Self::GreaterOrEqual => !matches!(ordering, Ordering::Less),
            Self::Equal => matches!(ordering, Ordering::Equal),
            Self::NotEqual => !matches!(ordering, Ordering::Equal),
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
