//! CLI command handlers, one file per command.

mod completions;
mod fetch;
mod list;
mod man;

pub use completions::run_completions;
pub use fetch::run_fetch;
pub use list::run_list;
pub use man::run_man;
