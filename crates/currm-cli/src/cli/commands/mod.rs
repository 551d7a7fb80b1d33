//! CLI command handlers. Each command is in its own file.

mod check;
mod pull;

pub use check::run_check;
pub use pull::run_pull;
