pub mod cli;
pub mod load_config;
pub mod submit;

pub use cli::{run, Cli};
