//! Input Bindings Module
//!
//! Maps physical keys to logical actions so game code never matches on keys
//! directly. An action may have several keys (crouch is both C and Left Ctrl);
//! a key drives at most one action.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, Up)
    MoveForward,
    /// Move backward (default: S, Down)
    MoveBack,
    /// Strafe left (default: A, Left)
    MoveLeft,
    /// Strafe right (default: D, Right)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Crouch toggle (default: C, Left Ctrl)
    Crouch,
    /// Toggle first/third person camera (default: V)
    CameraToggle,
}

/// Maps physical keys to logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Keys bound to each action, in binding order
    action_to_keys: HashMap<InputAction, Vec<KeyCode>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    ///
    /// - W / Up = MoveForward
    /// - S / Down = MoveBack
    /// - A / Left = MoveLeft
    /// - D / Right = MoveRight
    /// - Space = Jump
    /// - C / Left Ctrl = Crouch
    /// - V = CameraToggle
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::C, InputAction::Crouch);
        bindings.bind(KeyCode::ControlLeft, InputAction::Crouch);
        bindings.bind(KeyCode::V, InputAction::CameraToggle);

        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is
    /// removed. Other keys already bound to `action` are kept.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind_key(key);
        self.key_to_action.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|bound| *bound != key);
            }
        }
    }

    /// Remove every key bound to `action`.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(keys) = self.action_to_keys.remove(&action) {
            for key in keys {
                self.key_to_action.remove(&key);
            }
        }
    }

    /// Action driven by `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Keys bound to `action`.
    pub fn keys_for(&self, action: InputAction) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
