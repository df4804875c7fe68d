//=========================================================================
// World
//=========================================================================
//
// Headless host the gameplay controllers run against: transforms, a
// scene graph with simple colliders and bodies, and a character motor.
//
// Not a physics engine. Bodies are point masses that fall onto the
// floor plane; they never collide with each other or rotate.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod motor;
pub mod scene_graph;
pub mod transform;

//=== Public API ==========================================================

pub use motor::{CharacterMotor, ControllerHit, KinematicMotor, MoveOutcome};
pub use scene_graph::{Collider, Node, NodeId, RayHit, RigidBody, SceneGraph, SceneGraphError, Shape, Volume};
pub use transform::Transform;
