//=========================================================================
// Input Event Types
//=========================================================================
//
// Portable representation of the keyboard and mouse input the room
// controllers react to.
//
// Event Flow:
// ```text
// winit (platform thread)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker  ──►  AxisMapper (Horizontal / Vertical / Mouse X / Mouse Y)
//         ↓
//    ActionMapper  ──►  actions (Jump, ...)
// ```
//
// Pointer input comes in two flavours: `MouseMoved` carries the absolute
// cursor position (meaningless while the cursor is locked), `MouseMotion`
// carries raw device deltas and is what drives mouse-look.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,

    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier (location, not produced character).
///
/// Modifier keys are tracked as ordinary keys as well, so gameplay can
/// ask for "left shift held" independently of the [`Modifiers`] snapshot
/// attached to each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key reported by the platform that this enum does not cover.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event produced by the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Discrete events compare by kind, key/button and modifiers. Pointer
/// events (`MouseMoved`, `MouseMotion`) compare equal to any event of the
/// same kind so the platform buffer can coalesce them; their payload is
/// merged by the buffer, not by equality.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Absolute cursor position in window pixels (top-left origin).
    MouseMoved { x: f32, y: f32 },

    /// Raw pointer delta since the previous motion event.
    ///
    /// `dy` is positive when the device moves toward the user, matching
    /// winit's device events.
    MouseMotion { dx: f32, dy: f32 },

    /// Event the input system ignores.
    Unidentified,
}

impl InputEvent {
    /// Returns the event with its modifier snapshot replaced.
    ///
    /// Pointer and unidentified events are returned unchanged.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self {
            Self::KeyDown { modifiers: m, .. }
            | Self::KeyUp { modifiers: m, .. }
            | Self::MouseButtonDown { modifiers: m, .. }
            | Self::MouseButtonUp { modifiers: m, .. } => *m = modifiers,
            _ => {}
        }
        self
    }
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (MouseMotion { .. }, MouseMotion { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            // pointer payloads are not part of the identity
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key snapshot (left/right variants are not distinguished).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
    pub const SHIFT_CTRL: Self = Self { shift: true, ctrl: true, alt: false };

    /// Returns `true` when no modifier is held.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
