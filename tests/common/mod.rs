//! Shared test utilities for gitsi
//!
//! Real repositories for the binary and the libgit2 backend, in-memory fakes
//! for the state machine.

pub mod assertions;
pub mod fakes;
pub mod fixtures;
pub mod repository;
