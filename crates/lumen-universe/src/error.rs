// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_app_core::ConfigError;
use lumen_core::FrameError;
use lumen_geom::GeomError;
use thiserror::Error;

use crate::universe::PrimitiveId;

/// Errors raised by the universe driver.
#[derive(Debug, Error)]
pub enum UniverseError {
    /// The viewing frame or light speed is unusable.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// A primitive could not be built.
    #[error(transparent)]
    Geom(#[from] GeomError),
    /// Time steps must be finite and non-negative.
    #[error("invalid time step {0}")]
    InvalidDt(f64),
    /// No primitive is registered under this id.
    #[error("unknown primitive {0:?}")]
    UnknownPrimitive(PrimitiveId),
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
