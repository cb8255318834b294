//! Library crate root re-exporting server, tool, and resource modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod resources;
pub mod server;
pub mod tools;
