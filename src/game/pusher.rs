//=========================================================================
// Object Pusher
//=========================================================================
//
// Turns the player's collider contacts into impulses on dynamic bodies.
//
// For each hit against a non-kinematic body:
//   dir     = (hit.point - player_position) flattened to y = 0, normalized
//   impulse = dir * push_force + up * upward_force
//
// Kinematic and body-less nodes are left alone.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{info, warn};
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::world::{ControllerHit, NodeId, SceneGraph};

//=== PushSettings ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PushSettings {
    pub push_force: f32,
    pub upward_force: f32,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self { push_force: 2.0, upward_force: 0.5 }
    }
}

//=== ObjectPusher ========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectPusher {
    settings: PushSettings,
}

impl ObjectPusher {
    pub fn new(settings: PushSettings) -> Self {
        Self { settings }
    }

    pub fn impulse(&self, player_position: Vec3, hit_point: Vec3) -> Vec3 {
        let mut dir = hit_point - player_position;
        dir.y = 0.0;
        dir.normalize_or_zero() * self.settings.push_force + Vec3::Y * self.settings.upward_force
    }

    /// Applies impulses for every eligible hit; returns the nodes pushed.
    pub fn on_hits(&self, graph: &mut SceneGraph, player_position: Vec3, hits: &[ControllerHit]) -> Vec<NodeId> {
        let mut pushed = Vec::new();

        for hit in hits {
            let dynamic = graph
                .get(hit.node)
                .and_then(|n| n.body)
                .is_some_and(|body| !body.kinematic);
            if !dynamic {
                continue;
            }

            let impulse = self.impulse(player_position, hit.point);
            match graph.add_impulse(hit.node, impulse) {
                Ok(()) => {
                    info!(target: "game::pusher", "Pushed: {}", graph.name(hit.node));
                    pushed.push(hit.node);
                }
                Err(e) => warn!(target: "game::pusher", "Push failed: {}", e),
            }
        }

        pushed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Collider, RigidBody, Transform};

    const EPS: f32 = 1e-5;

    fn hit(node: NodeId, point: Vec3) -> ControllerHit {
        ControllerHit { node, point, normal: Vec3::NEG_X, move_direction: Vec3::X }
    }

    fn body_node(graph: &mut SceneGraph, name: &str, body: Option<RigidBody>) -> NodeId {
        let id = graph.spawn(name, Transform::from_xyz(2.0, 0.5, 0.0));
        let node = graph.get_mut(id).unwrap();
        node.collider = Some(Collider::cuboid(Vec3::splat(0.5)));
        node.body = body;
        id
    }

    #[test]
    fn impulse_is_horizontal_push_plus_lift() {
        let pusher = ObjectPusher::default();
        let impulse = pusher.impulse(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.5, 0.2, 0.0));
        assert!(impulse.abs_diff_eq(Vec3::new(2.0, 0.5, 0.0), EPS));
    }

    #[test]
    fn degenerate_direction_only_lifts() {
        let pusher = ObjectPusher::default();
        let impulse = pusher.impulse(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 1.0));
        assert!(impulse.abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), EPS));
    }

    #[test]
    fn pushes_only_dynamic_bodies() {
        let mut graph = SceneGraph::new();
        let crate_id = body_node(&mut graph, "crate", Some(RigidBody::default()));
        let statue = body_node(&mut graph, "statue", Some(RigidBody::kinematic()));
        let wall = body_node(&mut graph, "wall", None);
        let player = Vec3::new(0.0, 1.0, 0.0);
        let point = Vec3::new(1.5, 0.5, 0.0);

        let pushed = ObjectPusher::default().on_hits(
            &mut graph,
            player,
            &[hit(crate_id, point), hit(statue, point), hit(wall, point)],
        );

        assert_eq!(pushed, vec![crate_id]);
        let velocity = graph.node(crate_id).unwrap().body.unwrap().velocity;
        assert!(velocity.abs_diff_eq(Vec3::new(2.0, 0.5, 0.0), EPS));
        assert_eq!(graph.node(statue).unwrap().body.unwrap().velocity, Vec3::ZERO);
    }

    #[test]
    fn repeated_hits_accumulate() {
        let mut graph = SceneGraph::new();
        let crate_id = body_node(&mut graph, "crate", Some(RigidBody::default()));
        let pusher = ObjectPusher::new(PushSettings { push_force: 1.0, upward_force: 0.0 });
        let h = hit(crate_id, Vec3::new(1.5, 0.5, 0.0));

        pusher.on_hits(&mut graph, Vec3::ZERO, &[h, h]);

        let velocity = graph.node(crate_id).unwrap().body.unwrap().velocity;
        assert!(velocity.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), EPS));
    }
}
