//! Common test utilities for PetFriends contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the binary
//! - Fixtures: Animals and repositories in known states

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
