//! Command pipeline
//!
//! Player input -> Command (parser) -> Game operation (executor)

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, Flow};
pub use parser::Command;
