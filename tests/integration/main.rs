//! Cross-layer integration tests
//!
//! End-to-end scenarios and property-based evaluation laws.

mod scenarios;
