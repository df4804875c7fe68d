//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state with per-tick deltas.
//
// Architecture:
//   InputEvent → process_events() → held sets + tick deltas → query
//
// Tick lifecycle: clear() → process_events() → finalize_frame() → query
//
// "Pressed" and "released" answer for exactly one tick (the equivalent of
// GetKeyDown / GetKeyUp); "down" persists while the key is held (GetKey).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== StateTracker ========================================================

/// Tracks held keys/buttons and the transitions of the current tick.
pub struct StateTracker {
    //--- Persistent State ------------------------------------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    cursor_position: Vec2,
    modifiers: Modifiers,

    //--- Tick Deltas (reset by clear()) ----------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    motion_accumulator: Vec2,

    //--- Finalized -------------------------------------------------------
    mouse_motion: Vec2,
}

impl StateTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            cursor_position: Vec2::ZERO,
            modifiers: Modifiers::NONE,
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            motion_accumulator: Vec2::ZERO,
            mouse_motion: Vec2::ZERO,
        }
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears tick-specific deltas.
    pub(crate) fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.motion_accumulator = Vec2::ZERO;
    }

    /// Applies a batch of events in order.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Publishes the pointer motion gathered since `clear()`.
    pub(crate) fn finalize_frame(&mut self) {
        self.mouse_motion = self.motion_accumulator;
    }

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.insert(*key) {
                    self.keys_pressed.insert(*key);
                }
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if self.keys_down.remove(key) {
                    self.keys_released.insert(*key);
                }
            }
            InputEvent::MouseButtonDown { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.buttons_down.insert(*button) {
                    self.buttons_pressed.insert(*button);
                }
            }
            InputEvent::MouseButtonUp { button, modifiers } => {
                self.modifiers = *modifiers;
                if self.buttons_down.remove(button) {
                    self.buttons_released.insert(*button);
                }
            }
            InputEvent::MouseMoved { x, y } => {
                self.cursor_position = Vec2::new(*x, *y);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.motion_accumulator += Vec2::new(*dx, *dy);
            }
            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// `true` only on the tick the key went down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// `true` only on the tick the key went up.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Last known cursor position in window pixels.
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    /// Raw pointer motion accumulated over the last tick.
    pub fn mouse_motion(&self) -> Vec2 {
        self.mouse_motion
    }

    //=====================================================================
    // Query API - Modifiers
    //=====================================================================

    /// Modifier snapshot carried by the most recent discrete event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    fn motion(dx: f32, dy: f32) -> InputEvent {
        InputEvent::MouseMotion { dx, dy }
    }

    fn tick(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
        tracker.finalize_frame();
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn interact_key_is_pressed_for_a_single_tick() {
        let mut tracker = StateTracker::new();

        tick(&mut tracker, &[key_down(KeyCode::KeyE)]);
        assert!(tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));

        tick(&mut tracker, &[]);
        assert!(!tracker.is_key_pressed(KeyCode::KeyE));
        assert!(tracker.is_key_down(KeyCode::KeyE));

        tick(&mut tracker, &[key_up(KeyCode::KeyE)]);
        assert!(tracker.is_key_released(KeyCode::KeyE));
        assert!(!tracker.is_key_down(KeyCode::KeyE));
    }

    #[test]
    fn held_sprint_key_survives_many_ticks() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::ShiftLeft)]);

        for _ in 0..30 {
            tick(&mut tracker, &[]);
            assert!(tracker.is_key_down(KeyCode::ShiftLeft));
        }
    }

    #[test]
    fn tap_within_one_tick_reports_both_edges() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::Space), key_up(KeyCode::Space)]);

        assert!(tracker.is_key_pressed(KeyCode::Space));
        assert!(tracker.is_key_released(KeyCode::Space));
        assert!(!tracker.is_key_down(KeyCode::Space));
    }

    #[test]
    fn repeated_key_down_is_not_a_new_press() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_down(KeyCode::KeyW)]);
        tick(&mut tracker, &[key_down(KeyCode::KeyW)]);

        assert!(!tracker.is_key_pressed(KeyCode::KeyW));
        assert!(tracker.is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn spurious_key_up_is_ignored() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[key_up(KeyCode::KeyZ)]);
        assert!(!tracker.is_key_released(KeyCode::KeyZ));
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn motion_accumulates_within_a_tick() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[motion(2.0, 1.0), motion(3.0, -4.0)]);
        assert_eq!(tracker.mouse_motion(), Vec2::new(5.0, -3.0));
    }

    #[test]
    fn motion_resets_on_quiet_tick() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[motion(8.0, 8.0)]);
        tick(&mut tracker, &[]);
        assert_eq!(tracker.mouse_motion(), Vec2::ZERO);
    }

    #[test]
    fn cursor_position_tracks_absolute_moves() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::MouseMoved { x: 400.0, y: 300.0 }]);
        assert_eq!(tracker.cursor_position(), Vec2::new(400.0, 300.0));
        assert_eq!(tracker.mouse_motion(), Vec2::ZERO);
    }

    #[test]
    fn button_edges_are_tracked() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE }]);
        assert!(tracker.is_button_pressed(MouseButton::Left));

        tick(&mut tracker, &[InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE }]);
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    //=====================================================================
    // Modifiers
    //=====================================================================

    #[test]
    fn modifiers_follow_latest_discrete_event() {
        let mut tracker = StateTracker::new();
        tick(&mut tracker, &[InputEvent::KeyDown { key: KeyCode::ControlLeft, modifiers: Modifiers::CTRL }]);
        assert_eq!(tracker.modifiers(), Modifiers::CTRL);
    }
}
