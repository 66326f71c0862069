//! Semantic validation and tree construction.
//!
//! The parser recognizes shapes; the builder decides whether they mean
//! anything. Every predicate, command, and literal is checked against the
//! catalog here, and only well-typed nodes ever enter the arena.

use stratagem_catalog::Catalog;
use stratagem_foundation::{Domain, Error, ErrorKind, PlayerFilter, RelOp, Result, Value};

use crate::script::{Action, CondId, Condition, Rule, Script};

/// A raw literal as recognized by the parser, before type checking.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Integer token.
    Int(i64),
    /// Bare symbol token.
    Symbol(String),
    /// Quoted string token.
    Text(String),
}

impl Literal {
    /// Describes this literal for mismatch diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Int(_) => "integer".into(),
            Self::Symbol(s) => format!("symbol `{s}`"),
            Self::Text(_) => "string".into(),
        }
    }
}

/// Why a literal did not fit a value slot.
enum ResolveFailure {
    /// The symbol is not a member of the slot's enumerated domain.
    Unknown(Error),
    /// The literal is of the wrong kind for the slot entirely.
    WrongKind,
}

/// Builds a [`Script`] while validating every construct against the
/// catalog. One builder produces one script; any failure abandons the
/// whole build.
pub struct ScriptBuilder {
    catalog: &'static Catalog,
    script: Script,
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptBuilder {
    /// Creates a builder over the process-wide catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::global(),
            script: Script::new(),
        }
    }

    /// Builds an atomic condition, validating the qualifier and comparison
    /// against the predicate's signature.
    ///
    /// # Errors
    /// `UnknownPredicate`, `UnknownEnumLiteral`, `QualifierTypeMismatch`,
    /// `ComparisonTypeMismatch`, or `RelOpNotApplicable`.
    pub fn atomic(
        &mut self,
        name: &str,
        qualifier: Option<&Literal>,
        comparison: Option<(RelOp, &Literal)>,
    ) -> Result<CondId> {
        let predicate = self.catalog.predicate(name)?;
        let sig = predicate.sig();

        let qualifier = match (sig.qualifier, qualifier) {
            (None, None) => None,
            (Some(domain), Some(literal)) => {
                Some(self.resolve(domain, literal).map_err(|failure| {
                    match failure {
                        ResolveFailure::Unknown(err) => err,
                        ResolveFailure::WrongKind => {
                            Error::new(ErrorKind::QualifierTypeMismatch {
                                predicate: name.into(),
                                expected: domain.to_string(),
                                found: literal.describe(),
                            })
                        }
                    }
                })?)
            }
            (Some(domain), None) => {
                return Err(Error::new(ErrorKind::QualifierTypeMismatch {
                    predicate: name.into(),
                    expected: domain.to_string(),
                    found: "nothing".into(),
                }));
            }
            (None, Some(literal)) => {
                return Err(Error::new(ErrorKind::QualifierTypeMismatch {
                    predicate: name.into(),
                    expected: "no qualifier".into(),
                    found: literal.describe(),
                }));
            }
        };

        let comparison = match (sig.comparison, comparison) {
            // The bare form is always legal; it evaluates by truthiness
            (_, None) => None,
            (Some(domain), Some((op, literal))) => {
                let value = self.resolve(domain, literal).map_err(|failure| {
                    match failure {
                        ResolveFailure::Unknown(err) => err,
                        ResolveFailure::WrongKind => {
                            Error::new(ErrorKind::ComparisonTypeMismatch {
                                predicate: name.into(),
                                expected: domain,
                                found: literal.describe(),
                            })
                        }
                    }
                })?;
                Some((op, value))
            }
            (None, Some(_)) => {
                return Err(Error::new(ErrorKind::RelOpNotApplicable {
                    predicate: name.into(),
                }));
            }
        };

        Ok(self.script.push_condition(Condition::Atomic {
            predicate,
            qualifier,
            comparison,
        }))
    }

    /// Builds a disjunction of two condition subtrees.
    pub fn or(&mut self, left: CondId, right: CondId) -> CondId {
        self.script.push_condition(Condition::Or { left, right })
    }

    /// Builds a negation.
    ///
    /// # Errors
    /// `NegationOfCompoundCondition` if `inner` is not an atomic node.
    pub fn negated(&mut self, inner: CondId) -> Result<CondId> {
        if !matches!(self.script.condition(inner), Condition::Atomic { .. }) {
            return Err(Error::new(ErrorKind::NegationOfCompoundCondition));
        }
        Ok(self.script.push_condition(Condition::Not { inner }))
    }

    /// Builds an action, validating arity and argument domains against the
    /// command's signature.
    ///
    /// # Errors
    /// `UnknownCommand`, `UnknownEnumLiteral`, `ArityMismatch`, or
    /// `ArgumentTypeMismatch`.
    pub fn action(&mut self, name: &str, args: &[Literal]) -> Result<Action> {
        let command = self.catalog.command(name)?;
        let sig = command.sig();

        if args.len() != sig.params.len() {
            return Err(Error::new(ErrorKind::ArityMismatch {
                command: name.into(),
                expected: sig.params.len(),
                found: args.len(),
            }));
        }

        let mut values = Vec::with_capacity(args.len());
        for (slot, (domain, literal)) in sig.params.iter().zip(args).enumerate() {
            let value = self.resolve(*domain, literal).map_err(|failure| {
                match failure {
                    ResolveFailure::Unknown(err) => err,
                    ResolveFailure::WrongKind => {
                        Error::new(ErrorKind::ArgumentTypeMismatch {
                            command: name.into(),
                            slot,
                            expected: *domain,
                            found: literal.describe(),
                        })
                    }
                }
            })?;
            values.push(value);
        }

        Ok(Action {
            command,
            args: values,
        })
    }

    /// Finishes one rule.
    ///
    /// # Errors
    /// `EmptyConditionList` or `EmptyActionList`.
    pub fn finish_rule(&mut self, conditions: Vec<CondId>, actions: Vec<Action>) -> Result<()> {
        if conditions.is_empty() {
            return Err(Error::new(ErrorKind::EmptyConditionList));
        }
        if actions.is_empty() {
            return Err(Error::new(ErrorKind::EmptyActionList));
        }
        self.script.push_rule(Rule {
            conditions,
            actions,
        });
        Ok(())
    }

    /// Consumes the builder and returns the compiled script.
    #[must_use]
    pub fn finish(self) -> Script {
        self.script
    }

    /// Resolves a raw literal against the domain a slot expects.
    fn resolve(
        &self,
        expected: Domain,
        literal: &Literal,
    ) -> std::result::Result<Value, ResolveFailure> {
        match (expected, literal) {
            (Domain::Integer, Literal::Int(n)) => Ok(Value::Int(*n)),
            (Domain::Text, Literal::Text(s)) => Ok(Value::text(s.as_str())),
            (Domain::Player, Literal::Int(n)) => u8::try_from(*n)
                .ok()
                .filter(|n| (1..=8).contains(n))
                .map(|n| Value::Player(PlayerFilter::Number(n)))
                .ok_or(ResolveFailure::WrongKind),
            (domain, Literal::Symbol(s)) if !matches!(domain, Domain::Integer | Domain::Text) => {
                self.catalog
                    .resolve_enum(domain, s)
                    .map_err(ResolveFailure::Unknown)
            }
            _ => Err(ResolveFailure::WrongKind),
        }
    }
}
