//! Keyboard Input Module
//!
//! Generic key codes, decoupled from any windowing system. A host maps its
//! native key events onto these before handing them to
//! [`InputState`](super::InputState).

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Stance / camera
    C,
    V,
    ControlLeft,
    ControlRight,
    ShiftLeft,
    ShiftRight,

    Escape,
    Enter,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Parse a key name as written in scripts and config files.
    ///
    /// Names are case-insensitive; unknown names map to [`KeyCode::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "w" => KeyCode::W,
            "a" => KeyCode::A,
            "s" => KeyCode::S,
            "d" => KeyCode::D,
            "space" => KeyCode::Space,
            "up" | "arrowup" => KeyCode::ArrowUp,
            "down" | "arrowdown" => KeyCode::ArrowDown,
            "left" | "arrowleft" => KeyCode::ArrowLeft,
            "right" | "arrowright" => KeyCode::ArrowRight,
            "c" => KeyCode::C,
            "v" => KeyCode::V,
            "ctrl" | "lctrl" | "controlleft" => KeyCode::ControlLeft,
            "rctrl" | "controlright" => KeyCode::ControlRight,
            "shift" | "lshift" | "shiftleft" => KeyCode::ShiftLeft,
            "rshift" | "shiftright" => KeyCode::ShiftRight,
            "escape" | "esc" => KeyCode::Escape,
            "enter" | "return" => KeyCode::Enter,
            _ => KeyCode::Unknown,
        }
    }
}
