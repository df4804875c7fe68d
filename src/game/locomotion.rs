//=========================================================================
// Locomotion
//=========================================================================
//
// Ground speed selection, planar motion and the vertical velocity model.
//
// Vertical model:
//   - jump launch speed comes from the desired apex height:
//       v0 = sqrt(jump_force * -2 * gravity)
//   - gravity is scaled separately while rising (vy > 0) and otherwise
//   - a grounded, falling body is pinned to a small downward velocity so
//     the motor keeps reporting ground contact
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use serde::Deserialize;

//=== LocomotionSettings ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    /// Apex height of a jump.
    pub jump_force: f32,
    pub gravity: f32,
    pub gravity_scale_ascending: f32,
    pub gravity_scale_descending: f32,
    pub grounded_velocity: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            sprint_speed: 9.0,
            crouch_speed: 2.5,
            jump_force: 2.0,
            gravity: -9.81,
            gravity_scale_ascending: 2.0,
            gravity_scale_descending: 2.0,
            grounded_velocity: -2.0,
        }
    }
}

//=== SpeedTier ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedTier {
    #[default]
    Walk,
    Sprint,
    Crouch,
}

impl SpeedTier {
    /// Sprint wins when both modifier keys are held.
    pub fn select(sprint_held: bool, crouch_held: bool) -> Self {
        match (sprint_held, crouch_held) {
            (true, _) => Self::Sprint,
            (false, true) => Self::Crouch,
            (false, false) => Self::Walk,
        }
    }

    pub fn speed(self, settings: &LocomotionSettings) -> f32 {
        match self {
            Self::Walk => settings.walk_speed,
            Self::Sprint => settings.sprint_speed,
            Self::Crouch => settings.crouch_speed,
        }
    }
}

//=== Planar motion =======================================================

/// Rotation of a body turned `yaw_degrees` to the right.
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

/// `right * x + forward * z` in the basis of a body with the given yaw.
///
/// Not normalized: diagonal input moves faster than straight input.
pub fn planar_motion(yaw_degrees: f32, x: f32, z: f32) -> Vec3 {
    let rotation = yaw_rotation(yaw_degrees);
    rotation * Vec3::X * x + rotation * Vec3::NEG_Z * z
}

//=== Vertical motion =====================================================

/// Launch speed that reaches `jump_force` units above the start.
///
/// Zero when gravity does not pull down.
pub fn jump_velocity(jump_force: f32, gravity: f32) -> f32 {
    if gravity >= 0.0 || jump_force <= 0.0 {
        return 0.0;
    }
    (jump_force * -2.0 * gravity).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalMotion {
    velocity: f32,
}

impl VerticalMotion {
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn launch(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Pins a grounded, falling body to the stick velocity.
    ///
    /// Returns true when the pin was applied.
    pub fn stick_to_ground(&mut self, grounded: bool, settings: &LocomotionSettings) -> bool {
        if grounded && self.velocity < 0.0 {
            self.velocity = settings.grounded_velocity;
            return true;
        }
        false
    }

    pub fn gravity_scale(&self, settings: &LocomotionSettings) -> f32 {
        if self.velocity > 0.0 {
            settings.gravity_scale_ascending
        } else {
            settings.gravity_scale_descending
        }
    }

    /// Applies one step of gravity and returns this step's vertical displacement.
    pub fn integrate(&mut self, settings: &LocomotionSettings, dt: f32) -> f32 {
        self.velocity += settings.gravity * self.gravity_scale(settings) * dt;
        self.velocity * dt
    }
}

//=== JumpState ===========================================================

/// Whether the current airtime began with a jump that has not landed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Grounded,
    Jumped,
}

//=========================================================================
// Unit Tests
//=========================================================================
