//! Test modules for the Mauka Dictionary.
//!
//! This module contains the crate-internal test suites:
//! - Unit tests for each component
//! - Property-based tests using proptest
//! - Test fixtures and utilities


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{phone_book, word_set_strategy, word_strategy, TestFixture};
