//! Command implementations

pub mod container;
pub mod quality;
pub mod run;
pub mod stack;
pub mod terraform;
pub mod version;
