//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags and
//! returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
