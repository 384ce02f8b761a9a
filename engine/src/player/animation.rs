//! Animation notifications.
//!
//! The controller pushes state flags to an [`AnimationSink`] at the end of
//! every tick. Nothing flows back; the animation graph cannot influence
//! movement.

/// Boolean parameters driven every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    IsRunning,
    IsCrouching,
    IsGrounded,
    IsFalling,
}

impl AnimParam {
    pub const ALL: [AnimParam; 4] = [
        AnimParam::IsRunning,
        AnimParam::IsCrouching,
        AnimParam::IsGrounded,
        AnimParam::IsFalling,
    ];

    /// Parameter name as used by animation graphs.
    pub fn name(self) -> &'static str {
        match self {
            AnimParam::IsRunning => "IsRunning",
            AnimParam::IsCrouching => "IsCrouching",
            AnimParam::IsGrounded => "IsGrounded",
            AnimParam::IsFalling => "IsFalling",
        }
    }
}

/// One-shot triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Jump,
}

pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimParam, value: bool);
    fn set_trigger(&mut self, trigger: AnimTrigger);
}

/// Snapshot of the animation parameters for one tick.
///
/// Also usable as a sink that simply records what it was told.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationFlags {
    pub is_running: bool,
    pub is_crouching: bool,
    pub is_grounded: bool,
    pub is_falling: bool,
    /// Jump trigger fired this tick
    pub jump_triggered: bool,
}

impl AnimationFlags {
    /// Idle pose: nothing running, nothing crouched, nothing falling.
    pub fn idle() -> Self {
        Self {
            is_grounded: true,
            ..Self::default()
        }
    }

    pub fn get(&self, param: AnimParam) -> bool {
        match param {
            AnimParam::IsRunning => self.is_running,
            AnimParam::IsCrouching => self.is_crouching,
            AnimParam::IsGrounded => self.is_grounded,
            AnimParam::IsFalling => self.is_falling,
        }
    }

    /// Push every parameter (and the trigger, if fired) into `sink`.
    pub fn apply_to(&self, sink: &mut dyn AnimationSink) {
        for param in AnimParam::ALL {
            sink.set_bool(param, self.get(param));
        }
        if self.jump_triggered {
            sink.set_trigger(AnimTrigger::Jump);
        }
    }
}

impl AnimationSink for AnimationFlags {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        match param {
            AnimParam::IsRunning => self.is_running = value,
            AnimParam::IsCrouching => self.is_crouching = value,
            AnimParam::IsGrounded => self.is_grounded = value,
            AnimParam::IsFalling => self.is_falling = value,
        }
    }

    fn set_trigger(&mut self, trigger: AnimTrigger) {
        match trigger {
            AnimTrigger::Jump => self.jump_triggered = true,
        }
    }
}

/// Sink for rigs without an animation graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAnimator;

impl AnimationSink for NullAnimator {
    fn set_bool(&mut self, _param: AnimParam, _value: bool) {}
    fn set_trigger(&mut self, _trigger: AnimTrigger) {}
}
