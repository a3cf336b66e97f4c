//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache engine.
//!
//! # Tasks
//! - Reaper: removes expired cache entries on a fixed interval

mod reaper;

pub use reaper::spawn_reaper;
