//! Command implementations for ontosearch

pub mod config;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod search;
pub mod series;
pub mod stats;
