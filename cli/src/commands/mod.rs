//! CLI command implementations.

mod generate;

pub use generate::generate;
