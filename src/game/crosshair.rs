//=========================================================================
// Crosshair
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, warn};

//=== Internal Dependencies ===============================================

use crate::world::{NodeId, SceneGraph};

//=== Crosshair ===========================================================

/// Keeps the screen-center crosshair node visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crosshair {
    node: Option<NodeId>,
}

impl Crosshair {
    pub const NODE_NAME: &'static str = "crosshair";

    pub fn with_node(node: NodeId) -> Self {
        Self { node: Some(node) }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Looks the node up by name unless one was assigned.
    pub fn start(&mut self, graph: &SceneGraph) {
        if self.node.is_some() {
            return;
        }
        self.node = graph.find_by_name(Self::NODE_NAME);
        if self.node.is_none() {
            error!(target: "game::crosshair", "Crosshair node '{}' not found", Self::NODE_NAME);
        }
    }

    pub fn update(&self, graph: &mut SceneGraph) {
        let Some(node) = self.node else {
            return;
        };
        if let Err(e) = graph.set_active(node, true) {
            warn!(target: "game::crosshair", "Crosshair update failed: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
