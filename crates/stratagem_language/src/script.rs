//! Compiled rule trees.
//!
//! Condition nodes live in a flat arena owned by their [`Script`] and are
//! referenced by [`CondId`] handles. The tree is a strict forest (every
//! node has exactly one parent), so arena-and-index ownership replaces any
//! need for shared references.

use stratagem_catalog::{CommandId, PredicateId};
use stratagem_foundation::{RelOp, Value};

/// Handle for a condition node in its script's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CondId(pub(crate) u32);

impl CondId {
    /// Returns the arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One condition node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// A single typed query against world state.
    Atomic {
        /// The predicate being queried.
        predicate: PredicateId,
        /// Qualifier value, present iff the predicate's signature declares
        /// a qualifier domain.
        qualifier: Option<Value>,
        /// Relational comparison against the fetched value; absent for the
        /// bare form, which evaluates by truthiness.
        comparison: Option<(RelOp, Value)>,
    },
    /// Disjunction of two condition subtrees.
    Or {
        /// Left operand.
        left: CondId,
        /// Right operand.
        right: CondId,
    },
    /// Negation; the builder guarantees the inner node is atomic.
    Not {
        /// The negated node.
        inner: CondId,
    },
}

/// One compiled action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// The command to invoke.
    pub command: CommandId,
    /// Concrete argument values, arity fixed by the command's signature.
    pub args: Vec<Value>,
}

/// One compiled rule: a conjunction of conditions and an ordered action
/// list. The builder guarantees both lists are non-empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Conditions, all of which must hold for the rule to fire.
    pub conditions: Vec<CondId>,
    /// Actions executed in order when the rule fires.
    pub actions: Vec<Action>,
}

/// A compiled script: rules in authoring order plus the condition arena
/// they reference. Immutable once built; the evaluator never mutates it.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    conditions: Vec<Condition>,
    rules: Vec<Rule>,
}

impl Script {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a condition node and returns its handle.
    ///
    /// # Panics
    /// Panics if the arena outgrows 32-bit handles, which would need a
    /// four-billion-node script.
    pub(crate) fn push_condition(&mut self, condition: Condition) -> CondId {
        let id = CondId(u32::try_from(self.conditions.len()).expect("arena fits u32"));
        self.conditions.push(condition);
        id
    }

    /// Appends a rule.
    pub(crate) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Returns the condition node for a handle.
    ///
    /// # Panics
    /// Panics if `id` belongs to a different script.
    #[must_use]
    pub fn condition(&self, id: CondId) -> &Condition {
        &self.conditions[id.index()]
    }

    /// Returns the rules in authoring order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the script has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
