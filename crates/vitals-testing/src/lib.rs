//! Testing infrastructure for vitals integration tests.
//!
//! Provides record and entry builders so tests can state data shapes in one
//! line instead of spelling out full metric bags.

pub mod fixtures;
