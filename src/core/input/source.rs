//=========================================================================
// Input Source
//=========================================================================
//
// Read-only input surface handed to gameplay code.
//
// Gameplay never touches the tracker or mappers directly; it asks an
// `InputSource` for axes, raw keys and this tick's actions. The engine
// implements it on `GlobalContext`, tests implement it on scripted input.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{action::Action, axis::Axis, event::KeyCode};

//=== InputSource =========================================================

pub trait InputSource<A: Action> {
    /// Current value of a named axis.
    fn axis(&self, axis: Axis) -> f32;

    /// `true` while the key is held.
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// `true` only on the tick the key went down.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// `true` if the action fired this tick.
    fn action_triggered(&self, action: A) -> bool;
}
