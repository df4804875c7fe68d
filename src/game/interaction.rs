//=========================================================================
// Interaction Prompt
//=========================================================================
//
// Proximity prompt over the nearest interactable and aimed interaction.
//
// Each tick:
//   1. Sphere overlap around the player; the first active node carrying
//      the interactable tag (lowest id) becomes the target.
//   2. The indicator node is shown just above the target, turned toward
//      the camera and then half a turn about its own up axis. With no
//      target in range it is hidden and the target cleared.
//   3. On the interact key, a ray from the camera through the screen
//      center must hit the target itself for the interaction to fire.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{info, warn};
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::world::{NodeId, SceneGraph, SceneGraphError, Transform};

//=== InteractionSettings =================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub range: f32,
    pub indicator_lift: f32,
    pub tag: String,
    pub indicator_name: String,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            range: 3.0,
            indicator_lift: 0.1,
            tag: String::from("Interactable"),
            indicator_name: String::from("E indicator"),
        }
    }
}

//=== InteractionPrompt ===================================================

#[derive(Debug, Clone, Default)]
pub struct InteractionPrompt {
    settings: InteractionSettings,
    indicator: Option<NodeId>,
    target: Option<NodeId>,
}

impl InteractionPrompt {
    pub fn new(settings: InteractionSettings) -> Self {
        Self { settings, indicator: None, target: None }
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn indicator(&self) -> Option<NodeId> {
        self.indicator
    }

    //--- Update -----------------------------------------------------------

    /// Refreshes the prompt and returns the node interacted with, if any.
    ///
    /// `camera` is the camera's world transform.
    pub fn update(
        &mut self,
        graph: &mut SceneGraph,
        player_position: Vec3,
        camera: &Transform,
        interact_pressed: bool,
    ) -> Option<NodeId> {
        if let Err(e) = self.detect(graph, player_position, camera) {
            warn!(target: "game::interaction", "Prompt update failed: {}", e);
            self.target = None;
        }

        if interact_pressed {
            self.interact(graph, camera)
        } else {
            None
        }
    }

    fn detect(&mut self, graph: &mut SceneGraph, center: Vec3, camera: &Transform) -> Result<(), SceneGraphError> {
        let tag = self.settings.tag.as_str();
        let found = graph
            .overlap_sphere(center, self.settings.range)
            .into_iter()
            .find(|id| graph.get(*id).is_some_and(|n| n.has_tag(tag)));

        match found {
            Some(target) => self.show(graph, target, camera),
            None => self.hide(graph),
        }
    }

    fn show(&mut self, graph: &mut SceneGraph, target: NodeId, camera: &Transform) -> Result<(), SceneGraphError> {
        let indicator = match self.indicator {
            Some(id) => id,
            None => {
                let id = graph.spawn(self.settings.indicator_name.clone(), Transform::IDENTITY);
                self.indicator = Some(id);
                id
            }
        };

        let mut pose = Transform::from_translation(graph.world_position(target)? + Vec3::Y * self.settings.indicator_lift);
        pose.look_at(camera.translation, Vec3::Y);
        pose.rotate_local_y(180.0);

        graph.set_parent(indicator, None, false)?;
        let node = graph.node_mut(indicator)?;
        node.active = true;
        node.local = pose;

        self.target = Some(target);
        Ok(())
    }

    /// Hides the indicator and forgets the target.
    pub fn hide(&mut self, graph: &mut SceneGraph) -> Result<(), SceneGraphError> {
        self.target = None;
        match self.indicator {
            Some(indicator) => graph.set_active(indicator, false),
            None => Ok(()),
        }
    }

    fn interact(&self, graph: &SceneGraph, camera: &Transform) -> Option<NodeId> {
        let target = self.target?;
        if self.indicator.is_none() {
            return None;
        }

        let hit = graph.raycast(camera.translation, camera.forward(), f32::INFINITY)?;
        if hit.node != target {
            return None;
        }

        info!(target: "game::interaction", "Interacted with: {}", graph.name(target));
        Some(target)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
