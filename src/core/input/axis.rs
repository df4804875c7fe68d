//=========================================================================
// Input Axes
//=========================================================================
//
// Named analog axes derived from the tracked input state.
//
// Architecture:
//   StateTracker → AxisMapper::update(dt) → AxisState → query by Axis
//
// Keyboard axes ease toward their target (-1, 0, +1):
//   - toward a non-zero target at `sensitivity` units per second
//   - back to zero at `gravity` units per second
//   - with `snap`, reversing direction jumps through zero first
//
// Mouse axes are raw pointer motion scaled by `mouse_scale`, with the
// vertical axis flipped so moving the mouse away from the user is positive.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;

//=== Internal Dependencies ===============================================

use super::event::KeyCode;
use super::state_tracker::StateTracker;

//=== Axis ================================================================

/// Named analog input axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Strafe: negative left, positive right.
    Horizontal,
    /// Walk: negative backward, positive forward.
    Vertical,
    MouseX,
    MouseY,
}

//=== AxisSettings ========================================================

/// Smoothing parameters shared by the keyboard axes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub sensitivity: f32,
    pub gravity: f32,
    pub snap: bool,
    pub mouse_scale: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
            mouse_scale: 0.1,
        }
    }
}

//=== AxisBinding =========================================================

/// Keys driving one keyboard axis in each direction.
#[derive(Debug, Clone, Default)]
struct AxisBinding {
    negative: Vec<KeyCode>,
    positive: Vec<KeyCode>,
}

impl AxisBinding {
    fn target(&self, state: &StateTracker) -> f32 {
        let neg = self.negative.iter().any(|k| state.is_key_down(*k));
        let pos = self.positive.iter().any(|k| state.is_key_down(*k));
        match (neg, pos) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        }
    }
}

//=== AxisState ===========================================================

/// Axis values published for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisState {
    horizontal: f32,
    vertical: f32,
    mouse_x: f32,
    mouse_y: f32,
}

impl AxisState {
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::MouseX => self.mouse_x,
            Axis::MouseY => self.mouse_y,
        }
    }
}

//=== AxisMapper ==========================================================

/// Turns held keys and pointer motion into axis values.
pub(crate) struct AxisMapper {
    settings: AxisSettings,
    horizontal: AxisBinding,
    vertical: AxisBinding,
}

impl AxisMapper {
    /// Creates a mapper with WASD and arrow-key bindings.
    pub(crate) fn new() -> Self {
        Self {
            settings: AxisSettings::default(),
            horizontal: AxisBinding {
                negative: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
                positive: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            },
            vertical: AxisBinding {
                negative: vec![KeyCode::KeyS, KeyCode::ArrowDown],
                positive: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            },
        }
    }

    pub(crate) fn set_settings(&mut self, settings: AxisSettings) {
        self.settings = settings;
    }

    pub(crate) fn settings(&self) -> AxisSettings {
        self.settings
    }

    /// Advances every axis by one tick of `dt` seconds.
    pub(crate) fn update(&self, state: &StateTracker, axes: &mut AxisState, dt: f32) {
        let s = self.settings;
        axes.horizontal = smooth(axes.horizontal, self.horizontal.target(state), &s, dt);
        axes.vertical = smooth(axes.vertical, self.vertical.target(state), &s, dt);

        let motion = state.mouse_motion();
        axes.mouse_x = motion.x * s.mouse_scale;
        axes.mouse_y = -motion.y * s.mouse_scale;
    }
}

//=== Smoothing ===========================================================

fn smooth(current: f32, target: f32, s: &AxisSettings, dt: f32) -> f32 {
    if target == 0.0 {
        return move_towards(current, 0.0, s.gravity * dt);
    }

    let start = if s.snap && current * target < 0.0 { 0.0 } else { current };
    move_towards(start, target, s.sensitivity * dt)
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
