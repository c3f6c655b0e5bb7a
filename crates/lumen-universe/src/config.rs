// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Driver settings and how they are loaded.

use std::path::Path;

use lumen_app_core::{ConfigService, ConfigStore};
use lumen_config_fs::FsConfigStore;
use lumen_core::math::SLICE_EPSILON;
use lumen_core::{FrameTransform, Kinematics};
use serde::{Deserialize, Serialize};

use crate::error::UniverseError;

/// Key the universe settings are stored under.
pub const CONFIG_KEY: &str = "universe";

/// Settings of a [`crate::Universe`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniverseConfig {
    /// Light speed, in space units per second.
    pub c: f64,
    /// Scene length in seconds before the clock wraps to zero.
    pub t_max: f64,
    /// Fraction of the remaining velocity gap closed each frame, in `(0, 1]`.
    pub easing: f64,
    /// Boost family.
    pub kinematics: Kinematics,
    /// Measure the scene length in the viewing frame instead of R0.
    pub adjust_t_max: bool,
    /// Cutting-plane tolerance in `ct` units.
    pub epsilon: f64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            t_max: 5.0,
            easing: 0.1,
            kinematics: Kinematics::Lorentz,
            adjust_t_max: false,
            epsilon: SLICE_EPSILON,
        }
    }
}

impl UniverseConfig {
    /// Checks every field; the light speed is checked through
    /// [`FrameTransform::new`].
    pub fn validate(&self) -> Result<(), UniverseError> {
        self.transform()?;
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(UniverseError::InvalidConfig(format!(
                "t_max must be positive, got {}",
                self.t_max
            )));
        }
        if !(self.easing > 0.0 && self.easing <= 1.0) {
            return Err(UniverseError::InvalidConfig(format!(
                "easing must be in (0, 1], got {}",
                self.easing
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(UniverseError::InvalidConfig(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Boost family and light speed as a transform factory.
    pub fn transform(&self) -> Result<FrameTransform, UniverseError> {
        Ok(FrameTransform::new(self.kinematics, self.c)?)
    }
}

/// Loads [`CONFIG_KEY`] from `service`, falling back to defaults when it is
/// missing, and validates the result.
pub fn load_config<S: ConfigStore>(service: &ConfigService<S>) -> Result<UniverseConfig, UniverseError> {
    let config: UniverseConfig = service.load_or_default(CONFIG_KEY)?;
    if let Err(err) = config.validate() {
        tracing::warn!(%err, "rejected stored universe config");
        return Err(err);
    }
    Ok(config)
}

/// Loads the settings saved in the platform config directory (e.g.
/// `~/.config/lumen/universe.json`), falling back to defaults when none were
/// saved.
pub fn load_user_config() -> Result<UniverseConfig, UniverseError> {
    load_config(&ConfigService::new(FsConfigStore::new()?))
}

/// Like [`load_user_config`], with the settings read from `dir`.
pub fn load_config_from_dir(dir: impl AsRef<Path>) -> Result<UniverseConfig, UniverseError> {
    load_config(&ConfigService::new(FsConfigStore::at(dir)?))
}
