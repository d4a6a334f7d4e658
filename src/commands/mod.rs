//! Command implementations

mod compile;
mod match_paths;

pub use compile::compile;
pub use match_paths::match_paths;
