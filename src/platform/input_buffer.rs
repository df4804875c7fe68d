//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame staging area between winit callbacks and the channel flush.
//
// Responsibilities:
// - Keep discrete inputs (keys, buttons) in arrival order
// - Collapse consecutive duplicates (OS key repeat that slipped through)
// - Keep only the latest absolute cursor position
// - Sum raw mouse motion so no look input is lost between flushes
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<Vec2>,
    motion: Option<Vec2>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
            motion: None,
        }
    }

    //--- Discrete ---------------------------------------------------------

    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Any Event --------------------------------------------------------

    /// Records an event: positions replace, motion accumulates, anything
    /// else is queued as discrete.
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { x, y } => self.cursor = Some(Vec2::new(x, y)),
            InputEvent::MouseMotion { dx, dy } => {
                *self.motion.get_or_insert(Vec2::ZERO) += Vec2::new(dx, dy);
            }
            other => self.push_discrete(other),
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes everything buffered since the last drain.
    ///
    /// Returns `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let mut continuous = Vec::with_capacity(2);
        if let Some(p) = self.cursor.take() {
            continuous.push(InputEvent::MouseMoved { x: p.x, y: p.y });
        }
        if let Some(m) = self.motion.take() {
            continuous.push(InputEvent::MouseMotion { dx: m.x, dy: m.y });
        }

        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none() && self.motion.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, Modifiers};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyW));
        buffer.push_discrete(key_down(KeyCode::KeyW));
        buffer.push_discrete(key_down(KeyCode::KeyD));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 2);
    }

    #[test]
    fn non_consecutive_duplicates_are_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyE));
        buffer.push_discrete(InputEvent::KeyUp { key: KeyCode::KeyE, modifiers: Modifiers::NONE });
        buffer.push_discrete(key_down(KeyCode::KeyE));

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 3);
    }

    #[test]
    fn cursor_keeps_latest_position() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        buffer.push(InputEvent::MouseMoved { x: 20.0, y: 30.0 });

        let (_, continuous) = buffer.drain().unwrap();
        match continuous.as_slice() {
            [InputEvent::MouseMoved { x, y }] => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("unexpected continuous batch {:?}", other),
        }
    }

    #[test]
    fn motion_accumulates_between_flushes() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::MouseMotion { dx: 3.0, dy: 1.0 });
        buffer.push(InputEvent::MouseMotion { dx: -1.0, dy: 4.0 });

        let (_, continuous) = buffer.drain().unwrap();
        match continuous.as_slice() {
            [InputEvent::MouseMotion { dx, dy }] => assert_eq!((*dx, *dy), (2.0, 5.0)),
            other => panic!("unexpected continuous batch {:?}", other),
        }
    }

    #[test]
    fn drain_empties_and_second_drain_is_none() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::Space));
        buffer.push(InputEvent::MouseMotion { dx: 1.0, dy: 0.0 });

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_keeps_discrete_capacity_for_reuse() {
        let mut buffer = InputBuffer::new();
        let capacity = buffer.discrete.capacity();
        buffer.push_discrete(key_down(KeyCode::KeyA));

        let (discrete, _) = buffer.drain().unwrap();
        assert!(discrete.capacity() >= capacity);
    }
}
