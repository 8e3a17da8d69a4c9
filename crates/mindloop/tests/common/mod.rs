//! Shared test utilities for mindloop integration tests.
//!
//! This module provides:
//! - `TestHarness` for running documents through a ready engine with pinned randomness
//! - Builder patterns for documents and configurations

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::{fixture_document, fixture_text, fixtures_dir, TestHarness};
