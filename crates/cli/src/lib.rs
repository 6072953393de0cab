//! Line-oriented shell over an in-memory stock ledger.

pub mod command;
pub mod shell;

pub use command::{Command, parse_command};
pub use shell::Shell;
