//! Bisearch Core Library
//!
//! Graph model, graph documents and bidirectional path search used by the
//! `bisearch` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
