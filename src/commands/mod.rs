//! CLI commands for bisearch

pub mod check;
pub mod demo;
pub mod dispatch;
pub mod path;
