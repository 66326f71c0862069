//! Core types, values, and errors for Stratagem.
//!
//! This crate provides:
//! - [`Value`] - The tagged union carried by qualifiers, comparisons, and
//!   command arguments
//! - [`Domain`] - Type descriptors for typed argument slots
//! - [`RelOp`] - Relational operators used inside atomic conditions
//! - [`PlayerId`] / [`PlayerFilter`] - Participant identity and selectors
//! - [`Error`] - Rich error types with source context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod error;
pub mod player;
pub mod value;

pub use domain::Domain;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use player::{PlayerFilter, PlayerId};
pub use value::{EnumLiteral, RelOp, Value};
