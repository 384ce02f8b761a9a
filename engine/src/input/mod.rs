//! Input Module
//!
//! Platform-agnostic input polling for the character rig. The host forwards
//! key and mouse events as they arrive; once per tick it calls
//! [`InputState::frame`] to get a [`FrameInput`] sample with the axes, held
//! buttons and key-down edges for that tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use character_rig::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // From the event loop
//! input.handle_key(KeyCode::W, true);
//! input.add_look_delta(12.0, -3.0);
//!
//! // Once per tick
//! let frame = input.frame();
//! assert_eq!(frame.vertical, 1.0);
//! ```

pub mod bindings;
pub mod keyboard;

use std::collections::HashSet;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::KeyCode;

/// One tick of polled input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Strafe axis in [-1, 1] (positive = right)
    pub horizontal: f32,
    /// Forward axis in [-1, 1] (positive = forward)
    pub vertical: f32,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump is held
    pub jump_held: bool,
    /// Crouch went down this tick
    pub crouch_pressed: bool,
    /// Camera toggle went down this tick
    pub camera_toggle_pressed: bool,
    /// Mouse movement accumulated since the previous tick
    pub look_delta: Vec2,
}

impl FrameInput {
    /// Sample with only movement axes set.
    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
            ..Self::default()
        }
    }
}

/// Held keys, key-down edges and mouse motion between ticks.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held: HashSet<KeyCode>,
    pressed_since_frame: HashSet<KeyCode>,
    look_delta: Vec2,
}

impl InputState {
    /// Input state with the default bindings.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::new())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            pressed_since_frame: HashSet::new(),
            look_delta: Vec2::ZERO,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Record a key press or release.
    ///
    /// Key repeat (press while already held) does not produce a new edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.pressed_since_frame.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Accumulate mouse motion. Non-finite deltas are dropped.
    pub fn add_look_delta(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(dx, dy);
        if delta.is_finite() {
            self.look_delta += delta;
        } else {
            tracing::warn!(dx, dy, "dropping non-finite look delta");
        }
    }

    /// Whether any key bound to `action` is held.
    pub fn action_held(&self, action: InputAction) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.held.contains(key))
    }

    /// Whether any key bound to `action` went down since the last frame.
    pub fn action_pressed(&self, action: InputAction) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| self.pressed_since_frame.contains(key))
    }

    /// Raw axis from two opposing actions: -1, 0 or 1.
    pub fn axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        (self.action_held(positive) as i32 - self.action_held(negative) as i32) as f32
    }

    /// Take this tick's sample and clear edges and mouse motion.
    ///
    /// A key pressed and released between two frames still reports its
    /// down edge once.
    pub fn frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            horizontal: self.axis(InputAction::MoveLeft, InputAction::MoveRight),
            vertical: self.axis(InputAction::MoveBack, InputAction::MoveForward),
            jump_pressed: self.action_pressed(InputAction::Jump),
            jump_held: self.action_held(InputAction::Jump),
            crouch_pressed: self.action_pressed(InputAction::Crouch),
            camera_toggle_pressed: self.action_pressed(InputAction::CameraToggle),
            look_delta: self.look_delta,
        };
        self.pressed_since_frame.clear();
        self.look_delta = Vec2::ZERO;
        frame
    }

    /// Release everything (focus lost).
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed_since_frame.clear();
        self.look_delta = Vec2::ZERO;
    }
}
