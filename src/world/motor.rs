//=========================================================================
// Character Motor
//=========================================================================
//
// Collision-constrained movement for the player body.
//
// `KinematicMotor` approximates the player capsule with a box and moves
// it one axis at a time (X, Z, then Y). On each axis the move is clamped
// against:
//   - the floor plane at y = 0
//   - every solid (non-trigger) collider in the scene graph, taken as
//     its world-space bounding box
//
// Each axis move is swept: the box stops at the nearest collider whose
// near face lies on its path, however long the move. Colliders already
// overlapping the box before a move never block it, so a body spawned
// inside geometry can walk out.
//
// `is_grounded` reflects the last move with a vertical component: it is
// true when that move was stopped from below.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::scene_graph::{NodeId, SceneGraph, Volume};

//=== ControllerHit =======================================================

/// Contact reported when a move runs into a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerHit {
    pub node: NodeId,
    /// Closest point on the collider to the motor's center.
    pub point: Vec3,
    pub normal: Vec3,
    /// Unit direction of the move that produced the contact.
    pub move_direction: Vec3,
}

//=== MoveOutcome =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    /// Displacement actually applied.
    pub applied: Vec3,
    pub hits: Vec<ControllerHit>,
    pub collided_below: bool,
}

//=== CharacterMotor ======================================================

/// Movement capability the player controller drives.
pub trait CharacterMotor {
    fn move_by(&mut self, world: &SceneGraph, delta: Vec3) -> MoveOutcome;

    fn is_grounded(&self) -> bool;

    fn position(&self) -> Vec3;
}

//=== KinematicMotor ======================================================

/// Contact tolerance for touching faces.
const SKIN: f32 = 1e-4;

#[derive(Debug, Clone)]
pub struct KinematicMotor {
    position: Vec3,
    half_extents: Vec3,
    grounded: bool,
    /// Node standing for the body itself; never collides with the motor.
    body: Option<NodeId>,
}

impl KinematicMotor {
    /// Motor sized like a capsule of `radius` and total `height`,
    /// centered at `position`.
    pub fn new(position: Vec3, radius: f32, height: f32) -> Self {
        Self {
            position,
            half_extents: Vec3::new(radius, height * 0.5, radius),
            grounded: false,
            body: None,
        }
    }

    pub fn with_body(mut self, body: NodeId) -> Self {
        self.body = Some(body);
        self
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = false;
    }

    fn bounds_at(&self, center: Vec3) -> (Vec3, Vec3) {
        (center - self.half_extents, center + self.half_extents)
    }

    /// Moves along a single axis, stopping at the first collider the box
    /// would enter on the way. Only the collider(s) at that distance are
    /// reported.
    fn sweep_axis(
        &mut self,
        world: &SceneGraph,
        axis: usize,
        amount: f32,
        direction: Vec3,
        hits: &mut Vec<ControllerHit>,
    ) -> bool {
        let start = self.position;
        let (start_min, start_max) = self.bounds_at(start);
        let mut travel = amount.abs();
        let mut blocked = false;

        if axis == 1 && amount < 0.0 && start_min.y < travel {
            travel = start_min.y.max(0.0);
            blocked = true;
        }

        // Region the box passes through; cross axes are pulled in by the
        // skin so resting contacts (floor of a crate, side of a wall) are
        // not obstacles.
        let mut end = start;
        end[axis] += amount.signum() * travel;
        let (end_min, end_max) = self.bounds_at(end);
        let mut swept_min = start_min.min(end_min) + Vec3::splat(SKIN);
        let mut swept_max = start_max.max(end_max) - Vec3::splat(SKIN);
        swept_min[axis] -= SKIN;
        swept_max[axis] += SKIN;

        let inner_min = start_min + Vec3::splat(SKIN);
        let inner_max = start_max - Vec3::splat(SKIN);

        let mut nearest: Option<f32> = None;
        let mut contacts: Vec<(NodeId, Volume)> = Vec::new();

        for (node, volume) in world.solid_volumes(self.body) {
            if volume.intersects_aabb(inner_min, inner_max) || !volume.intersects_aabb(swept_min, swept_max) {
                continue;
            }

            let (obstacle_min, obstacle_max) = bounding_box(&volume);
            let gap = if amount > 0.0 {
                obstacle_min[axis] - start_max[axis]
            } else {
                start_min[axis] - obstacle_max[axis]
            };
            if gap < -SKIN || gap >= travel {
                continue;
            }
            let gap = gap.max(0.0);

            match nearest {
                Some(best) if gap > best + SKIN => {}
                Some(best) if gap >= best - SKIN => {
                    nearest = Some(best.min(gap));
                    contacts.push((node, volume));
                }
                _ => {
                    nearest = Some(gap);
                    contacts.clear();
                    contacts.push((node, volume));
                }
            }
        }

        if let Some(gap) = nearest {
            travel = gap;
            blocked = true;
        }

        let mut target = start;
        target[axis] += amount.signum() * travel;
        if axis == 1 && target.y < self.half_extents.y {
            target.y = self.half_extents.y;
        }

        let mut normal = Vec3::ZERO;
        normal[axis] = -amount.signum();
        hits.extend(contacts.into_iter().map(|(node, volume)| ControllerHit {
            node,
            point: volume.closest_point(target),
            normal,
            move_direction: direction,
        }));

        self.position = target;
        blocked
    }
}

impl CharacterMotor for KinematicMotor {
    fn move_by(&mut self, world: &SceneGraph, delta: Vec3) -> MoveOutcome {
        let start = self.position;
        let direction = delta.normalize_or_zero();
        let mut outcome = MoveOutcome::default();

        for axis in [0, 2, 1] {
            let amount = delta[axis];
            if amount == 0.0 {
                continue;
            }
            let blocked = self.sweep_axis(world, axis, amount, direction, &mut outcome.hits);
            if axis == 1 {
                outcome.collided_below = blocked && amount < 0.0;
                self.grounded = outcome.collided_below;
            }
        }

        outcome.applied = self.position - start;
        outcome
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

//=== Helpers =============================================================

fn bounding_box(volume: &Volume) -> (Vec3, Vec3) {
    match *volume {
        Volume::Sphere { center, radius } => (center - Vec3::splat(radius), center + Vec3::splat(radius)),
        Volume::Aabb { min, max } => (min, max),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
