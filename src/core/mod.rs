// src/core/mod.rs
//! Configuration, file system and HTTP plumbing around the vacancy core

pub mod config_manager;
pub mod fs_ops;
pub mod hh_client;

pub use config_manager::ConfigManager;
pub use fs_ops::FsOps;
pub use hh_client::HeadHunterClient;
