//! CLI command handlers, one per file.

mod contains;
mod describe;
mod filter;
mod resolve;

pub use contains::run_contains;
pub use describe::run_describe;
pub use filter::run_filter;
pub use resolve::run_resolve;
