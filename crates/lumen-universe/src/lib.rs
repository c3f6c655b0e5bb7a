// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Lumen universe
//!
//! Owns the scene clock and the viewing frame, advances them once per
//! rendered frame and hands out [`lumen_geom::Moment`]s for slicing.
#![forbid(unsafe_code)]

mod config;
mod error;
mod universe;

pub use config::{
    load_config, load_config_from_dir, load_user_config, UniverseConfig, CONFIG_KEY,
};
pub use error::UniverseError;
pub use universe::{FrameReport, NotifierId, PrimitiveId, SliceBuffers, Universe};
