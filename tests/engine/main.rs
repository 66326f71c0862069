//! Integration tests for Layer 3: Engine
//!
//! Tests for the world facade and per-tick evaluation.

mod evaluation;
