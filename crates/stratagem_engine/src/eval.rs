//! Per-tick rule evaluation and command dispatch.
//!
//! One [`Evaluator`] belongs to one AI-controlled participant. Each tick
//! it makes exactly one pass over the script: every rule is evaluated in
//! authoring order, every rule whose conjunction holds fires all of its
//! actions in order, and nothing carries over to the next tick. A rule
//! that stays true keeps firing every tick unless the script itself
//! guards against it (for example with `DisableSelf`, which the facade
//! honors).

use stratagem_catalog::CommandId;
use stratagem_foundation::PlayerId;
use stratagem_language::{CondId, Condition, Script};

use crate::world::{CommandError, WorldFacade};

/// Result of one tick: what fired, what was issued, what failed.
///
/// Command failures never abort the tick; they are collected here for the
/// host to surface however it sees fit.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Number of rules whose conjunction held this tick.
    pub rules_fired: usize,
    /// Number of commands the facade accepted this tick.
    pub commands_issued: usize,
    /// Commands the facade refused, in evaluation order.
    pub failures: Vec<CommandFailure>,
}

impl TickReport {
    /// Returns true if every issued command was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One command the facade refused during a tick.
#[derive(Debug)]
pub struct CommandFailure {
    /// Index of the rule that issued the command.
    pub rule: usize,
    /// The refused command.
    pub command: CommandId,
    /// The facade's error.
    pub error: CommandError,
}

/// Per-participant rule evaluator.
///
/// Carries no state beyond the participant's identity; the script and the
/// world are borrowed per tick.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    player: PlayerId,
}

impl Evaluator {
    /// Creates an evaluator acting on behalf of `player`.
    #[must_use]
    pub const fn new(player: PlayerId) -> Self {
        Self { player }
    }

    /// Returns the participant this evaluator acts for.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Makes one pass over the script.
    ///
    /// Every rule is evaluated, in authoring order; there is no
    /// first-match-wins. Actions of a firing rule run in order without
    /// re-checking conditions in between.
    pub fn tick<W: WorldFacade>(&self, script: &Script, world: &mut W) -> TickReport {
        let mut report = TickReport::default();

        for (index, rule) in script.rules().iter().enumerate() {
            let holds = rule
                .conditions
                .iter()
                .all(|&id| self.eval_condition(script, id, &*world));
            if !holds {
                continue;
            }

            report.rules_fired += 1;
            for action in &rule.actions {
                match world.invoke_command(action.command, &action.args, self.player) {
                    Ok(()) => report.commands_issued += 1,
                    Err(error) => report.failures.push(CommandFailure {
                        rule: index,
                        command: action.command,
                        error,
                    }),
                }
            }
        }

        report
    }

    /// Evaluates one condition node.
    ///
    /// A failed fact read evaluates false rather than aborting the tick,
    /// as does a comparison with no defined semantics (such as an ordered
    /// operator over an enumerated value).
    fn eval_condition<W: WorldFacade>(&self, script: &Script, id: CondId, world: &W) -> bool {
        match script.condition(id) {
            Condition::Atomic {
                predicate,
                qualifier,
                comparison,
            } => {
                let Ok(value) = world.read_fact(*predicate, qualifier.as_ref(), self.player)
                else {
                    return false;
                };
                match comparison {
                    Some((op, literal)) => value.compare(*op, literal).unwrap_or(false),
                    None => value.is_truthy(),
                }
            }
            Condition::Or { left, right } => {
                self.eval_condition(script, *left, world)
                    || self.eval_condition(script, *right, world)
            }
            Condition::Not { inner } => !self.eval_condition(script, *inner, world),
        }
    }
}
