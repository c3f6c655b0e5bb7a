// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application services shared by Lumen front ends.
//! Keeps storage adapters thin and independent of any renderer.

pub mod config;
pub mod memory;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use memory::MemoryConfigStore;
