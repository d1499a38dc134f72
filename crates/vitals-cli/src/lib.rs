mod args;
mod commands;
mod handlers;

pub use args::{Cli, Commands, EntryCommand, SourceCommand};
pub use commands::run;
