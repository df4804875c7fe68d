//=========================================================================
// Game Configuration
//=========================================================================
//
// Every tunable grouped per component, loadable from an optional JSON
// file. Absent sections and fields keep their defaults, so
//
//   { "player": { "locomotion": { "sprint_speed": 12.0 } } }
//
// is a complete config.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::input::AxisSettings;
use crate::game::{DisplaySettings, InteractionSettings, PlayerSettings, PushSettings};

//=== WindowConfig ========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logic ticks per second.
    pub tps: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: String::from("Tiny Rooms"), tps: 60.0 }
    }
}

//=== GameConfig ==========================================================

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub axes: AxisSettings,
    pub player: PlayerSettings,
    pub interaction: InteractionSettings,
    pub push: PushSettings,
    pub display: DisplaySettings,
}

/// Values supplied on the command line; they win over the file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfigOverrides {
    pub tps: Option<f64>,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        cfg.validate().with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }

    pub fn apply_overrides(&mut self, overrides: GameConfigOverrides) -> Result<()> {
        if let Some(tps) = overrides.tps {
            self.window.tps = tps;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let tps = self.window.tps;
        if !(tps.is_finite() && tps > 0.0) {
            bail!("tps must be a positive number, got {tps}");
        }
        if self.interaction.range < 0.0 {
            bail!("interaction range must not be negative, got {}", self.interaction.range);
        }
        if self.player.recoil.phase_duration < 0.0 {
            bail!("recoil phase duration must not be negative, got {}", self.player.recoil.phase_duration);
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
