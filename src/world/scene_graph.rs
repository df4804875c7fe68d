//=========================================================================
// Scene Graph
//=========================================================================
//
// Arena of named, tagged nodes with parent links and optional colliders
// and rigid bodies.
//
// Architecture:
// ```text
//   SceneGraph
//     nodes: Vec<Node>        (NodeId = index, never reused)
//       ├─ local: Transform   (relative to parent)
//       ├─ parent / children
//       ├─ active flag        (inherited: inactive ancestors hide a subtree)
//       ├─ collider?          (sphere | box, optionally trigger)
//       └─ body?              (kinematic flag, velocity, mass)
// ```
//
// Queries (`overlap_sphere`, `raycast`, `find_by_name`) only see nodes
// that are active in the hierarchy. Results are ordered by node id, so
// ties resolve the same way every run.
//
// Colliders are treated as axis-aligned in world space; rotation of the
// owning node does not rotate a box.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::trace;

//=== Internal Dependencies ===============================================

use super::transform::Transform;

//=== NodeId ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Colliders & Bodies ==================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: Shape,
    /// Triggers show up in queries but never block movement.
    pub is_trigger: bool,
}

impl Collider {
    pub fn sphere(radius: f32) -> Self {
        Self { shape: Shape::Sphere { radius }, is_trigger: false }
    }

    pub fn cuboid(half_extents: Vec3) -> Self {
        Self { shape: Shape::Box { half_extents }, is_trigger: false }
    }

    pub fn trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }
}

/// Point-mass body integrated by [`SceneGraph::step_bodies`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    /// Kinematic bodies ignore impulses and gravity.
    pub kinematic: bool,
    pub velocity: Vec3,
    pub mass: f32,
    /// Fraction of horizontal speed lost per second while resting on the floor.
    pub friction: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            kinematic: false,
            velocity: Vec3::ZERO,
            mass: 1.0,
            friction: 4.0,
        }
    }
}

impl RigidBody {
    pub fn kinematic() -> Self {
        Self { kinematic: true, ..Self::default() }
    }
}

//=== World-space volumes =================================================

/// A collider resolved into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    Sphere { center: Vec3, radius: f32 },
    Aabb { min: Vec3, max: Vec3 },
}

impl Volume {
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        match *self {
            Volume::Sphere { center, radius } => match (p - center).try_normalize() {
                Some(dir) if p.distance(center) > radius => center + dir * radius,
                _ => p,
            },
            Volume::Aabb { min, max } => p.clamp(min, max),
        }
    }

    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        match *self {
            Volume::Sphere { center: c, radius: r } => c.distance_squared(center) <= (r + radius).powi(2),
            Volume::Aabb { min, max } => center.clamp(min, max).distance_squared(center) <= radius * radius,
        }
    }

    pub fn intersects_aabb(&self, min: Vec3, max: Vec3) -> bool {
        match *self {
            Volume::Sphere { center, radius } => {
                center.clamp(min, max).distance_squared(center) < radius * radius
            }
            Volume::Aabb { min: a, max: b } => {
                a.x < max.x && b.x > min.x && a.y < max.y && b.y > min.y && a.z < max.z && b.z > min.z
            }
        }
    }

    /// Entry distance and surface normal along a unit ray.
    ///
    /// Rays starting inside the volume report no hit.
    fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<(f32, Vec3)> {
        match *self {
            Volume::Sphere { center, radius } => {
                let oc = origin - center;
                let b = oc.dot(dir);
                let c = oc.length_squared() - radius * radius;
                if c <= 0.0 {
                    return None;
                }
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let t = -b - disc.sqrt();
                if t < 0.0 {
                    return None;
                }
                let normal = (origin + dir * t - center).normalize_or_zero();
                Some((t, normal))
            }
            Volume::Aabb { min, max } => {
                let mut t_enter = f32::NEG_INFINITY;
                let mut t_exit = f32::INFINITY;
                let mut normal = Vec3::ZERO;

                for axis in 0..3 {
                    let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
                    if d.abs() < f32::EPSILON {
                        if o < lo || o > hi {
                            return None;
                        }
                        continue;
                    }
                    let (mut t0, mut t1) = ((lo - o) / d, (hi - o) / d);
                    let mut face = Vec3::ZERO;
                    face[axis] = -d.signum();
                    if t0 > t1 {
                        std::mem::swap(&mut t0, &mut t1);
                    }
                    if t0 > t_enter {
                        t_enter = t0;
                        normal = face;
                    }
                    t_exit = t_exit.min(t1);
                    if t_enter > t_exit {
                        return None;
                    }
                }

                (t_enter >= 0.0).then_some((t_enter, normal))
            }
        }
    }

    fn bottom(&self) -> f32 {
        match *self {
            Volume::Sphere { center, radius } => center.y - radius,
            Volume::Aabb { min, .. } => min.y,
        }
    }
}

//=== RayHit ==============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub node: NodeId,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

//=== SceneGraphError =====================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SceneGraphError {
    /// The id does not belong to this graph.
    UnknownNode(NodeId),

    /// Reparenting would make a node its own ancestor.
    Cycle { child: NodeId, parent: NodeId },

    /// The node carries no rigid body.
    NoRigidBody(NodeId),
}

impl std::fmt::Display for SceneGraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "Unknown node {}", id),
            Self::Cycle { child, parent } => {
                write!(f, "Parenting {} under {} would create a cycle", child, parent)
            }
            Self::NoRigidBody(id) => write!(f, "Node {} has no rigid body", id),
        }
    }
}

impl std::error::Error for SceneGraphError {}

//=== Node ================================================================

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub tag: Option<String>,
    pub active: bool,
    pub local: Transform,
    pub collider: Option<Collider>,
    pub body: Option<RigidBody>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}

//=== SceneGraph ==========================================================

#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Construction -----------------------------------------------------

    /// Adds an active root node.
    pub fn spawn(&mut self, name: impl Into<String>, local: Transform) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        trace!(target: "world", "Spawned {} '{}'", id, name);

        self.nodes.push(Node {
            name,
            tag: None,
            active: true,
            local,
            collider: None,
            body: None,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    //--- Access -----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneGraphError> {
        self.get(id).ok_or(SceneGraphError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneGraphError> {
        self.get_mut(id).ok_or(SceneGraphError::UnknownNode(id))
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.get(id).map_or("<unknown>", |n| n.name.as_str())
    }

    /// First node with this name, active or not.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    //--- Activity ---------------------------------------------------------

    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<(), SceneGraphError> {
        self.node_mut(id)?.active = active;
        Ok(())
    }

    /// True when the node and every ancestor are active.
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.get(current) {
                Some(node) if node.active => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    //--- Hierarchy --------------------------------------------------------

    /// Moves `child` under `parent` (or to the root with `None`).
    ///
    /// With `keep_world` the child's world pose is preserved by rewriting
    /// its local transform; otherwise the local transform is kept as is.
    pub fn set_parent(
        &mut self,
        child: NodeId,
        parent: Option<NodeId>,
        keep_world: bool,
    ) -> Result<(), SceneGraphError> {
        self.node(child)?;
        if let Some(p) = parent {
            self.node(p)?;
            let mut cursor = Some(p);
            while let Some(current) = cursor {
                if current == child {
                    return Err(SceneGraphError::Cycle { child, parent: p });
                }
                cursor = self.nodes[current.0].parent;
            }
        }

        let world = self.world_transform(child)?;

        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        if let Some(p) = parent {
            self.nodes[p.0].children.push(child);
        }
        self.nodes[child.0].parent = parent;

        if keep_world {
            let parent_world = match parent {
                Some(p) => self.world_transform(p)?,
                None => Transform::IDENTITY,
            };
            self.nodes[child.0].local = parent_world.inverse().mul_transform(&world);
        }

        trace!(
            target: "world",
            "Reparented '{}' under {:?}",
            self.nodes[child.0].name,
            parent.map(|p| self.name(p).to_owned())
        );
        Ok(())
    }

    pub fn world_transform(&self, id: NodeId) -> Result<Transform, SceneGraphError> {
        let node = self.node(id)?;
        match node.parent {
            Some(parent) => Ok(self.world_transform(parent)?.mul_transform(&node.local)),
            None => Ok(node.local),
        }
    }

    pub fn world_position(&self, id: NodeId) -> Result<Vec3, SceneGraphError> {
        Ok(self.world_transform(id)?.translation)
    }

    pub fn set_world_transform(&mut self, id: NodeId, world: Transform) -> Result<(), SceneGraphError> {
        let local = match self.node(id)?.parent {
            Some(parent) => self.world_transform(parent)?.inverse().mul_transform(&world),
            None => world,
        };
        self.nodes[id.0].local = local;
        Ok(())
    }

    /// Places a node at a world-space position, keeping its rotation.
    pub fn set_world_position(&mut self, id: NodeId, position: Vec3) -> Result<(), SceneGraphError> {
        let local = match self.node(id)?.parent {
            Some(parent) => self.world_transform(parent)?.inverse().transform_point(position),
            None => position,
        };
        self.nodes[id.0].local.translation = local;
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// World-space collider volume of a node, if it has one.
    pub fn volume(&self, id: NodeId) -> Option<Volume> {
        let collider = self.get(id)?.collider?;
        let world = self.world_transform(id).ok()?;
        let scale = world.scale.abs();

        Some(match collider.shape {
            Shape::Sphere { radius } => Volume::Sphere {
                center: world.translation,
                radius: radius * scale.max_element(),
            },
            Shape::Box { half_extents } => {
                let half = half_extents * scale;
                Volume::Aabb { min: world.translation - half, max: world.translation + half }
            }
        })
    }

    /// Active colliders (triggers included) touching the sphere, by id.
    pub fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<NodeId> {
        self.ids()
            .filter(|id| self.is_active_in_hierarchy(*id))
            .filter(|id| self.volume(*id).is_some_and(|v| v.intersects_sphere(center, radius)))
            .collect()
    }

    /// Nearest active collider along the ray within `max_distance`.
    ///
    /// Colliders containing the origin are skipped.
    pub fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.try_normalize()?;

        self.ids()
            .filter(|id| self.is_active_in_hierarchy(*id))
            .filter_map(|id| {
                let (distance, normal) = self.volume(id)?.ray_entry(origin, dir)?;
                (distance <= max_distance).then_some(RayHit {
                    node: id,
                    point: origin + dir * distance,
                    normal,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Solid (non-trigger) colliders of active nodes, excluding `ignore`.
    pub fn solid_volumes(&self, ignore: Option<NodeId>) -> impl Iterator<Item = (NodeId, Volume)> + '_ {
        self.ids()
            .filter(move |id| Some(*id) != ignore)
            .filter(move |id| self.get(*id).and_then(|n| n.collider).is_some_and(|c| !c.is_trigger))
            .filter(move |id| self.is_active_in_hierarchy(*id))
            .filter_map(move |id| self.volume(id).map(|v| (id, v)))
    }

    //--- Bodies -----------------------------------------------------------

    /// Instant velocity change of `impulse / mass`; kinematic bodies ignore it.
    pub fn add_impulse(&mut self, id: NodeId, impulse: Vec3) -> Result<(), SceneGraphError> {
        let body = self.node_mut(id)?.body.as_mut().ok_or(SceneGraphError::NoRigidBody(id))?;
        if !body.kinematic && body.mass > 0.0 {
            body.velocity += impulse / body.mass;
        }
        Ok(())
    }

    /// Integrates active dynamic bodies and rests them on the `y = 0` floor.
    pub fn step_bodies(&mut self, dt: f32, gravity: Vec3) {
        for index in 0..self.nodes.len() {
            let id = NodeId(index);
            if !self.is_active_in_hierarchy(id) {
                continue;
            }
            let Some(mut body) = self.nodes[index].body else {
                continue;
            };
            if body.kinematic {
                continue;
            }

            body.velocity += gravity * dt;
            self.nodes[index].local.translation += body.velocity * dt;

            if let Some(volume) = self.volume(id) {
                let penetration = -volume.bottom();
                if penetration >= 0.0 {
                    self.nodes[index].local.translation.y += penetration;
                    body.velocity.y = body.velocity.y.max(0.0);
                    let damping = (1.0 - body.friction * dt).max(0.0);
                    body.velocity.x *= damping;
                    body.velocity.z *= damping;
                }
            }

            self.nodes[index].body = Some(body);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    const EPS: f32 = 1e-4;

    fn crate_at(graph: &mut SceneGraph, name: &str, at: Vec3) -> NodeId {
        let id = graph.spawn(name, Transform::from_translation(at));
        graph.get_mut(id).unwrap().collider = Some(Collider::cuboid(Vec3::splat(0.5)));
        id
    }

    //--- Hierarchy --------------------------------------------------------

    #[test]
    fn world_transform_follows_parents() {
        let mut graph = SceneGraph::new();
        let root = graph.spawn("root", Transform::from_xyz(1.0, 2.0, 3.0));
        let child = graph.spawn("child", Transform::from_xyz(0.0, 1.0, 0.0));
        graph.set_parent(child, Some(root), false).unwrap();

        let pos = graph.world_position(child).unwrap();
        assert!(pos.abs_diff_eq(Vec3::new(1.0, 3.0, 3.0), EPS));
    }

    #[test]
    fn reparent_keep_world_preserves_pose() {
        let mut graph = SceneGraph::new();
        let holder = graph.spawn(
            "holder",
            Transform::from_xyz(5.0, 1.0, 0.0).with_rotation(Quat::from_rotation_y(1.0)),
        );
        let item = graph.spawn("item", Transform::from_xyz(0.0, 1.0, -2.0));
        let before = graph.world_transform(item).unwrap();

        graph.set_parent(item, Some(holder), true).unwrap();
        let after = graph.world_transform(item).unwrap();

        assert!(after.translation.abs_diff_eq(before.translation, EPS));
        assert!(after.forward().abs_diff_eq(before.forward(), EPS));
        assert_eq!(graph.node(holder).unwrap().children(), &[item]);

        graph.set_parent(item, None, true).unwrap();
        assert!(graph.node(holder).unwrap().children().is_empty());
        assert!(graph.world_position(item).unwrap().abs_diff_eq(before.translation, EPS));
    }

    #[test]
    fn reparent_rejects_cycles() {
        let mut graph = SceneGraph::new();
        let a = graph.spawn("a", Transform::IDENTITY);
        let b = graph.spawn("b", Transform::IDENTITY);
        graph.set_parent(b, Some(a), false).unwrap();

        assert_eq!(
            graph.set_parent(a, Some(b), false),
            Err(SceneGraphError::Cycle { child: a, parent: b })
        );
        assert!(graph.set_parent(a, Some(a), false).is_err());
    }

    #[test]
    fn unknown_nodes_are_reported() {
        let mut graph = SceneGraph::new();
        let ghost = NodeId(7);
        assert_eq!(graph.world_transform(ghost), Err(SceneGraphError::UnknownNode(ghost)));
        assert!(graph.set_active(ghost, false).is_err());
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut graph = SceneGraph::new();
        let first = graph.spawn("crosshair", Transform::IDENTITY);
        graph.spawn("crosshair", Transform::IDENTITY);

        assert_eq!(graph.find_by_name("crosshair"), Some(first));
        assert_eq!(graph.find_by_name("missing"), None);
    }

    //--- Queries ----------------------------------------------------------

    #[test]
    fn inactive_ancestors_hide_descendants_from_queries() {
        let mut graph = SceneGraph::new();
        let parent = graph.spawn("shelf", Transform::IDENTITY);
        let vase = crate_at(&mut graph, "vase", Vec3::ZERO);
        graph.set_parent(vase, Some(parent), false).unwrap();

        assert_eq!(graph.overlap_sphere(Vec3::ZERO, 1.0), vec![vase]);

        graph.set_active(parent, false).unwrap();
        assert!(!graph.is_active_in_hierarchy(vase));
        assert!(graph.overlap_sphere(Vec3::ZERO, 1.0).is_empty());
        assert!(graph.raycast(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, 10.0).is_none());
    }

    #[test]
    fn overlap_sphere_orders_by_id() {
        let mut graph = SceneGraph::new();
        let far = crate_at(&mut graph, "far", Vec3::new(2.5, 0.0, 0.0));
        let near = crate_at(&mut graph, "near", Vec3::new(1.0, 0.0, 0.0));
        crate_at(&mut graph, "outside", Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(graph.overlap_sphere(Vec3::ZERO, 3.0), vec![far, near]);
    }

    #[test]
    fn raycast_returns_nearest_hit() {
        let mut graph = SceneGraph::new();
        let back = crate_at(&mut graph, "back", Vec3::new(0.0, 0.0, -6.0));
        let front = crate_at(&mut graph, "front", Vec3::new(0.0, 0.0, -3.0));

        let hit = graph.raycast(Vec3::ZERO, Vec3::NEG_Z, 100.0).unwrap();
        assert_eq!(hit.node, front);
        assert!((hit.distance - 2.5).abs() < EPS);
        assert!(hit.normal.abs_diff_eq(Vec3::Z, EPS));

        graph.set_active(front, false).unwrap();
        assert_eq!(graph.raycast(Vec3::ZERO, Vec3::NEG_Z, 100.0).map(|h| h.node), Some(back));
        assert!(graph.raycast(Vec3::ZERO, Vec3::NEG_Z, 2.0).is_none());
    }

    #[test]
    fn raycast_hits_spheres_and_skips_containing_colliders() {
        let mut graph = SceneGraph::new();
        let ball = graph.spawn("ball", Transform::from_xyz(0.0, 0.0, -5.0));
        graph.get_mut(ball).unwrap().collider = Some(Collider::sphere(1.0));
        let shell = graph.spawn("shell", Transform::IDENTITY);
        graph.get_mut(shell).unwrap().collider = Some(Collider::sphere(0.5).trigger());

        let hit = graph.raycast(Vec3::ZERO, Vec3::NEG_Z, 10.0).unwrap();
        assert_eq!(hit.node, ball);
        assert!((hit.distance - 4.0).abs() < EPS);
    }

    #[test]
    fn solid_volumes_skip_triggers() {
        let mut graph = SceneGraph::new();
        let wall = crate_at(&mut graph, "wall", Vec3::ZERO);
        let zone = graph.spawn("zone", Transform::IDENTITY);
        graph.get_mut(zone).unwrap().collider = Some(Collider::sphere(2.0).trigger());

        let solids: Vec<_> = graph.solid_volumes(None).map(|(id, _)| id).collect();
        assert_eq!(solids, vec![wall]);
        assert_eq!(graph.solid_volumes(Some(wall)).count(), 0);
    }

    //--- Bodies -----------------------------------------------------------

    #[test]
    fn impulse_changes_dynamic_velocity_only() {
        let mut graph = SceneGraph::new();
        let dynamic = crate_at(&mut graph, "crate", Vec3::ZERO);
        graph.get_mut(dynamic).unwrap().body = Some(RigidBody { mass: 2.0, ..RigidBody::default() });
        let pinned = crate_at(&mut graph, "pinned", Vec3::ZERO);
        graph.get_mut(pinned).unwrap().body = Some(RigidBody::kinematic());
        let plain = crate_at(&mut graph, "plain", Vec3::ZERO);

        graph.add_impulse(dynamic, Vec3::new(4.0, 0.0, 0.0)).unwrap();
        graph.add_impulse(pinned, Vec3::new(4.0, 0.0, 0.0)).unwrap();

        assert_eq!(graph.node(dynamic).unwrap().body.unwrap().velocity, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(graph.node(pinned).unwrap().body.unwrap().velocity, Vec3::ZERO);
        assert_eq!(graph.add_impulse(plain, Vec3::X), Err(SceneGraphError::NoRigidBody(plain)));
    }

    #[test]
    fn bodies_fall_and_rest_on_floor() {
        let mut graph = SceneGraph::new();
        let id = crate_at(&mut graph, "crate", Vec3::new(0.0, 3.0, 0.0));
        graph.get_mut(id).unwrap().body = Some(RigidBody::default());

        for _ in 0..300 {
            graph.step_bodies(1.0 / 60.0, Vec3::new(0.0, -9.81, 0.0));
        }

        let pos = graph.world_position(id).unwrap();
        assert!((pos.y - 0.5).abs() < EPS);
        assert_eq!(graph.node(id).unwrap().body.unwrap().velocity.y, 0.0);
    }

    #[test]
    fn floor_friction_slows_sliding_bodies() {
        let mut graph = SceneGraph::new();
        let id = crate_at(&mut graph, "crate", Vec3::new(0.0, 0.5, 0.0));
        graph.get_mut(id).unwrap().body = Some(RigidBody::default());
        graph.add_impulse(id, Vec3::new(2.0, 0.0, 0.0)).unwrap();

        for _ in 0..120 {
            graph.step_bodies(1.0 / 60.0, Vec3::new(0.0, -9.81, 0.0));
        }

        let body = graph.node(id).unwrap().body.unwrap();
        assert!(body.velocity.x < 0.1);
        assert!(graph.world_position(id).unwrap().x > 0.0);
    }
}
