//! fibseq library — application logic for the Fibonacci sequence tool.

pub mod app;
pub mod config;
pub mod errors;
