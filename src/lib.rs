pub mod cli;
pub mod composer;
pub mod config;
pub mod domain;
pub mod errors;
pub mod git;
pub mod prompt;
pub mod utils;
