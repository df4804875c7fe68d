//=========================================================================
// Action Trait
//=========================================================================
//
// Actions: opaque identifiers the engine routes and the game interprets
// (the equivalent of named virtual buttons such as "Jump").
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// ```
/// use tiny_rooms::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum RoomAction { Jump }
///
/// impl Action for RoomAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================
