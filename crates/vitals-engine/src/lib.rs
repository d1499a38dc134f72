// Engine module - pure reconciliation logic (no I/O)
// This layer sits between connector output (types) and durable storage

pub mod assemble;
pub mod manual;
pub mod merge;
pub mod synthetic;

pub use assemble::assemble;
pub use manual::{FoldOutcome, fold_manual_entries};
pub use merge::merge;
pub use synthetic::{generate, generate_source};
