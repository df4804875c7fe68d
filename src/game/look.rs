//=========================================================================
// Mouse Look
//=========================================================================
//
// Yaw turns the body, pitch tilts the camera. Positive yaw turns right,
// positive pitch looks down. Pitch is clamped so the view never flips.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Quat;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::locomotion::yaw_rotation;

//=== LookSettings ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    pub sensitivity_x: f32,
    pub sensitivity_y: f32,
    /// Degrees above and below the horizon.
    pub pitch_limit: f32,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            sensitivity_x: 100.0,
            sensitivity_y: 100.0,
            pitch_limit: 90.0,
        }
    }
}

//=== MouseLook ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseLook {
    yaw: f32,
    pitch: f32,
}

impl MouseLook {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Degrees turned right from the initial heading.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Degrees below the horizon.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn apply(&mut self, mouse_x: f32, mouse_y: f32, dt: f32, settings: &LookSettings) {
        self.yaw += mouse_x * settings.sensitivity_x * dt;
        let limit = settings.pitch_limit.abs();
        self.pitch = (self.pitch - mouse_y * settings.sensitivity_y * dt).clamp(-limit, limit);
    }

    pub fn body_rotation(&self) -> Quat {
        yaw_rotation(self.yaw)
    }

    /// Camera rotation relative to the body.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.pitch.to_radians())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
