//=========================================================================
// Action Mapper
//=========================================================================
//
// Resolves key presses to game actions.
//
// Bindings are keyed by the physical key alone: the modifier snapshot on
// a press is ignored, so "Space = Jump" keeps firing while Shift is held
// for sprinting or Ctrl for crouching.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, KeyCode},
};

//=== ActionMapper ========================================================

pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self { key_bindings: HashMap::new() }
    }

    /// Binds `key` to `action`, replacing any earlier binding of `key`.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        if let Some(previous) = self.key_bindings.insert(key, action) {
            log::debug!("Rebound {:?}: {:?} -> {:?}", key, previous, action);
        }
    }

    /// Maps a key press to its action; everything else maps to `None`.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown { key, .. } => self.key_bindings.get(key).copied(),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
