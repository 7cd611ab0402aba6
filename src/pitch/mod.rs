//! The seven-scene pitch video built on the timeline and animation core.

pub mod config;
pub mod palette;
pub mod scenes;
pub mod timeline;
