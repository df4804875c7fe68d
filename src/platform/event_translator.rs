//=========================================================================
// Event Translator
//=========================================================================
//
// Turns winit window and device events into engine `InputEvent`s.
//
// Modifier state arrives out of band (`ModifiersChanged`), so the
// translator keeps the latest snapshot and stamps it onto every key and
// button event it emits. Events the game never reads (unmapped keys, OS
// auto-repeat, IME, touch) translate to `None`.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== EventTranslator =====================================================

pub(crate) struct EventTranslator {
    modifiers: Modifiers,
}

impl EventTranslator {
    pub(crate) fn new() -> Self {
        Self { modifiers: Modifiers::NONE }
    }

    pub(crate) fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Translates one window event.
    ///
    /// `ModifiersChanged` only updates the snapshot and yields `None`.
    pub(crate) fn window(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = Modifiers::from(state.state());
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                self.key(map_key(code)?, event.state)
            }
            WindowEvent::MouseInput { state, button, .. } => self.button(*button, *state),
            WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            _ => None,
        }
    }

    /// Raw device delta, used for mouse-look while the cursor is locked.
    pub(crate) fn motion(&self, (dx, dy): (f64, f64)) -> InputEvent {
        InputEvent::MouseMotion { dx: dx as f32, dy: dy as f32 }
    }

    fn key(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    fn button(&self, button: WinitMouseButton, state: ElementState) -> Option<InputEvent> {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        })
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

// Engine and winit share variant names for every key the game knows.
macro_rules! key_table {
    ($code:expr; $($name:ident),* $(,)?) => {
        match $code {
            $(WinitKeyCode::$name => Some(KeyCode::$name),)*
            _ => None,
        }
    };
}

/// Physical key to engine key; `None` for keys the engine does not name.
fn map_key(code: WinitKeyCode) -> Option<KeyCode> {
    key_table!(code;
        Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
        KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
        ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
        ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
        Space, Enter, Escape, Tab, Backspace, Delete,
    )
}

//=========================================================================
// Tests
//=========================================================================
