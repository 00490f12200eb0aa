//! fitwarp CLI library.
//!
//! This crate provides command-line interface utilities for the fitwarp
//! tools, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
