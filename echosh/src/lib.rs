// echosh/src/lib.rs
//! # echosh CLI
//!
//! This crate provides the command-line interface over the `echosh-core`
//! printing pipeline: a message (argument or piped stdin) goes through
//! sanitization, decoration, and optional log-file persistence.

pub mod cli;
pub mod logger;
