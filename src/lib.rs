pub mod cli;
pub mod config;
pub mod error;
pub mod reader;
pub mod session;
pub mod archive;
pub mod export;
