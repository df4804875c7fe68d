//=========================================================================
// Input System
//=========================================================================
//
// Turns the platform's event batches into per-tick input state, axis
// values and triggered actions.
//
// Architecture:
// ```text
//   Vec<Vec<InputEvent>>
//          ↓
//   StateTracker (held keys, tick edges, pointer motion)
//          ├──► AxisMapper   → AxisState  (Horizontal, Vertical, MouseX, MouseY)
//          └──► ActionMapper → Vec<A>     (Jump, ...)
// ```
//
// The system owns the mappers (configuration); the tracker, the axis
// values and the action list live in `GlobalContext` so scenes can read
// them through `InputSource`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod axis;
pub mod event;
pub mod source;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::Action;
pub use axis::{Axis, AxisSettings, AxisState};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use source::InputSource;
pub use state_tracker::StateTracker;

//=== Internal Dependencies ===============================================

use action_mapper::ActionMapper;
use axis::AxisMapper;

//=== InputSystem =========================================================

/// Input configuration and per-tick processing.
pub struct InputSystem<A: Action> {
    action_mapper: ActionMapper<A>,
    axis_mapper: AxisMapper,
}

impl<A: Action> InputSystem<A> {
    pub(crate) fn new() -> Self {
        Self {
            action_mapper: ActionMapper::new(),
            axis_mapper: AxisMapper::new(),
        }
    }

    //--- Bindings ---------------------------------------------------------

    /// Binds `key` to `action`. Held modifiers never block a binding.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.action_mapper.bind_key(key, action);
    }

    pub fn set_axis_settings(&mut self, settings: AxisSettings) {
        self.axis_mapper.set_settings(settings);
    }

    pub fn axis_settings(&self) -> AxisSettings {
        self.axis_mapper.settings()
    }

    //--- Tick Processing --------------------------------------------------

    /// Processes one tick of input.
    ///
    /// Updates `state`, advances `axes` by `dt` seconds and replaces
    /// `actions` with the actions triggered by this tick's presses.
    pub(crate) fn process_frame(
        &self,
        state: &mut StateTracker,
        axes: &mut AxisState,
        actions: &mut Vec<A>,
        batches: &[Vec<InputEvent>],
        dt: f32,
    ) {
        state.clear();
        actions.clear();

        for batch in batches {
            state.process_events(batch);
            actions.extend(batch.iter().filter_map(|e| self.action_mapper.map_event(e)));
        }

        state.finalize_frame();
        self.axis_mapper.update(state, axes, dt);

        if !actions.is_empty() {
            log::trace!("Actions this tick: {:?}", actions);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
