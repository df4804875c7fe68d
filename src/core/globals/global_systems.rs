//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Action bindings and axis tuning
/// - `scene_manager`: Scene registration and lifecycle
pub struct GlobalSystems<S: SceneKey, A: Action> {
    pub input: InputSystem<A>,
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Users configure systems through [`crate::Engine::init`].
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one logic tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Clock**: Advance the fixed-step clock
    /// 2. **Input**: Frame events → input state, axes and actions
    /// 3. **Scene Update**: Update every scene with the context
    pub(crate) fn update(&mut self, context: &mut GlobalContext<A>) {
        context.time.advance();

        let dt = context.time.delta_seconds();
        self.input.process_frame(
            &mut context.input_state,
            &mut context.axes,
            &mut context.actions,
            &context.frame_events,
            dt,
        );
        context.frame_events.clear();

        self.scene_manager.update(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
