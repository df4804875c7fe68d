//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input_state: Low-level input state (keys, mouse, modifiers)
// - axes: Smoothed axis values for this tick
// - actions: Actions triggered this tick
// - time: Fixed-step clock
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, Axis, AxisState, InputEvent, InputSource, KeyCode, StateTracker};
use crate::core::time::FrameTime;

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` in their lifecycle methods and
/// read input through its [`InputSource`] implementation.
pub struct GlobalContext<A: Action> {
    /// Raw input state tracker for low-level input queries.
    pub input_state: StateTracker,

    /// Axis values published by the input system.
    pub axes: AxisState,

    /// Actions triggered by this tick's presses.
    pub actions: Vec<A>,

    /// Fixed-step clock, advanced before each update.
    pub time: FrameTime,

    /// Input events for the current tick (consumed by the input system).
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<A: Action> GlobalContext<A> {
    /// Creates a new context with empty state.
    pub(crate) fn new(time: FrameTime) -> Self {
        Self {
            input_state: StateTracker::new(),
            axes: AxisState::default(),
            actions: Vec::new(),
            time,
            frame_events: Vec::new(),
        }
    }

    /// Step length of the current tick in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.time.delta_seconds()
    }
}

//=== InputSource =========================================================

impl<A: Action> InputSource<A> for GlobalContext<A> {
    fn axis(&self, axis: Axis) -> f32 {
        self.axes.get(axis)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.input_state.is_key_down(key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input_state.is_key_pressed(key)
    }

    fn action_triggered(&self, action: A) -> bool {
        self.actions.contains(&action)
    }
}
