use bitflags::bitflags;
use std::fmt::Display;

/// Represents a mouse button that can be pressed or released
#[derive(Debug, Clone, PartialEq)]
pub enum MouseButton {
    /// Left mouse button pressed (or depressed)
    Left,
    /// Middle mouse button pressed (or depressed)
    Middle,
    /// Right mouse button pressed (or depressed)
    Right,
}

impl Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MouseButton::Left => write!(f, "Left"),
            MouseButton::Middle => write!(f, "Middle"),
            MouseButton::Right => write!(f, "Right"),
        }
    }
}

bitflags! {
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const META    = 0b1000;
    }
}

/// Input events delivered by the host, already translated from its native
/// event types. Translation itself happens host-side; these are buffered by
/// the [`InputRouter`](crate::input::InputRouter) and replayed into the GUI
/// library at the start of each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MouseMove { x: f32, y: f32 },
    MouseDown { button: MouseButton, x: f32, y: f32 },
    MouseUp { button: MouseButton, x: f32, y: f32 },
    Scroll { dx: f32, dy: f32 },
    KeyDown { key: String, modifiers: Modifiers },
    KeyUp { key: String, modifiers: Modifiers },
    InputChar { character: char },
    /// Gamepad axis motion; `value` is in `-1.0 ..= 1.0`.
    JoyAxis { axis: u8, value: f32 },
    JoyButton { button: u8, pressed: bool },
}
