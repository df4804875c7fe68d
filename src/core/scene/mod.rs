//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle on the logic thread.
//
// Architecture:
//   SceneManager
//     └─ scenes: Vec<(S, Box<dyn Scene>)>   (registration order)
//
// Flow:
//   start()  → on_enter, bottom first   (logic thread start)
//   update() → Scene::update            (every tick)
//   stop()   → on_exit, top first       (logic thread exit)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Module Declarations =================================================

mod scene_manager;

//=== Public API ==========================================================

pub use scene_manager::SceneManager;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Trait =========================================================

/// Scene behavior with lifecycle hooks and per-tick logic.
///
/// Only `update()` is required:
///
/// ```rust
/// # use tiny_rooms::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum RoomAction { Jump }
/// # impl Action for RoomAction {}
/// struct Lobby;
///
/// impl Scene<RoomAction> for Lobby {
///     fn update(&mut self, ctx: &mut GlobalContext<RoomAction>) {
///         if ctx.action_triggered(RoomAction::Jump) {
///             // ...
///         }
///     }
/// }
/// ```
pub trait Scene<A: Action>: Send {
    /// Called once when the logic thread starts.
    fn on_enter(&mut self, _context: &mut GlobalContext<A>) {}

    /// Called once when the logic thread shuts down.
    fn on_exit(&mut self, _context: &mut GlobalContext<A>) {}

    /// Called every tick.
    fn update(&mut self, context: &mut GlobalContext<A>);
}
