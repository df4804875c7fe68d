//=========================================================================
// Inspect Display
//=========================================================================
//
// Museum-style close-up of an object.
//
// ```text
//   Idle ──trigger()──► Displaying { original_parent }
//     ▲                      │ mouse drags rotate the model
//     └──────exit()──────────┘ (exit key)
// ```
//
// While displaying, the blur overlay and the display camera are active
// and the model hangs off the display camera, keeping its world pose at
// the moment it was picked up. Leaving puts it back under its original
// parent (again keeping its world pose) and hides it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;
use crate::world::{NodeId, SceneGraph, SceneGraphError};

//=== DisplaySettings =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Degrees per second per unit of mouse axis.
    pub rotation_speed: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { rotation_speed: 100.0 }
    }
}

//=== DisplayState ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Displaying { original_parent: Option<NodeId> },
}

//=== InspectDisplay ======================================================

#[derive(Debug, Clone)]
pub struct InspectDisplay {
    settings: DisplaySettings,
    model: NodeId,
    display_camera: NodeId,
    overlay: NodeId,
    state: DisplayState,
}

impl InspectDisplay {
    pub const EXIT_KEY: KeyCode = KeyCode::KeyE;

    pub fn new(settings: DisplaySettings, model: NodeId, display_camera: NodeId, overlay: NodeId) -> Self {
        Self {
            settings,
            model,
            display_camera,
            overlay,
            state: DisplayState::Idle,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn is_displaying(&self) -> bool {
        matches!(self.state, DisplayState::Displaying { .. })
    }

    pub fn model(&self) -> NodeId {
        self.model
    }

    //--- Transitions ------------------------------------------------------

    /// Enters display mode. Returns `false` if already displaying.
    pub fn trigger(&mut self, graph: &mut SceneGraph) -> Result<bool, SceneGraphError> {
        if self.is_displaying() {
            return Ok(false);
        }

        graph.set_active(self.overlay, true)?;
        graph.set_active(self.display_camera, true)?;

        let original_parent = graph.node(self.model)?.parent();
        graph.set_parent(self.model, Some(self.display_camera), true)?;
        graph.set_active(self.model, true)?;

        self.state = DisplayState::Displaying { original_parent };
        debug!(target: "game::display", "Displaying '{}'", graph.name(self.model));
        Ok(true)
    }

    pub fn exit(&mut self, graph: &mut SceneGraph) -> Result<(), SceneGraphError> {
        let DisplayState::Displaying { original_parent } = self.state else {
            return Ok(());
        };
        self.state = DisplayState::Idle;

        graph.set_active(self.overlay, false)?;
        graph.set_active(self.display_camera, false)?;
        graph.set_parent(self.model, original_parent, true)?;
        graph.set_active(self.model, false)?;

        debug!(target: "game::display", "Put back '{}'", graph.name(self.model));
        Ok(())
    }

    //--- Update -----------------------------------------------------------

    /// Rotates the model from mouse motion and leaves on the exit key.
    ///
    /// Dragging right spins the model counter-clockwise seen from above;
    /// dragging up tips its top away from the viewer.
    ///
    /// Authored for a left-handed frame, the rotation is `-mouse_x` about
    /// up and `+mouse_y` about right. Positive angles turn the other way
    /// in this right-handed frame, so both signs flip here: `+mouse_x`
    /// about world Y and `-mouse_y` about world X give the same motion on
    /// screen.
    pub fn update(
        &mut self,
        graph: &mut SceneGraph,
        mouse_x: f32,
        mouse_y: f32,
        exit_pressed: bool,
        dt: f32,
    ) -> Result<(), SceneGraphError> {
        if !self.is_displaying() {
            return Ok(());
        }

        let speed = self.settings.rotation_speed;
        let mut world = graph.world_transform(self.model)?;
        world.rotate_world(Vec3::Y, mouse_x * speed * dt);
        world.rotate_world(Vec3::X, -mouse_y * speed * dt);
        graph.set_world_transform(self.model, world)?;

        if exit_pressed {
            self.exit(graph)?;
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
