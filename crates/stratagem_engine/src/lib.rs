//! Rule evaluation over a world facade.
//!
//! This crate runs compiled [`Script`](stratagem_language::Script)s: an
//! [`Evaluator`] makes one pass per tick, reading facts and issuing
//! commands through a [`WorldFacade`]. The facade is the only boundary
//! between the engine and the simulation; [`TableWorld`] is an in-memory
//! implementation for tests and demos.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eval;
pub mod world;

pub use eval::{CommandFailure, Evaluator, TickReport};
pub use world::{CommandError, FactError, IssuedCommand, TableWorld, WorldFacade};
