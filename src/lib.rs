pub mod cli;
pub mod commands;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod shell;
pub mod traits;
