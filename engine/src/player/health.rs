//! Health sink.
//!
//! The controller never touches health fields. It forwards damage through
//! [`HealthSink::take_damage`] and reads [`HealthSink::is_dead`] to gate
//! movement.

/// Outcome of a damage call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// Still alive with this much health left
    Alive(u32),
    /// This call brought health to zero
    Died,
    /// Health was already zero before the call
    AlreadyDead,
}

pub trait HealthSink {
    /// Subtract `amount`, clamping at zero.
    fn take_damage(&mut self, amount: u32) -> HealthStatus;

    fn current_health(&self) -> u32;

    fn max_health(&self) -> u32;

    fn is_dead(&self) -> bool {
        self.current_health() == 0
    }
}

/// Plain health pool: `0 <= current <= max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHealth {
    current: u32,
    max: u32,
}

impl PlayerHealth {
    /// Full health pool of `max_health`.
    pub fn new(max_health: u32) -> Self {
        Self {
            current: max_health,
            max: max_health,
        }
    }
}

impl Default for PlayerHealth {
    fn default() -> Self {
        Self::new(100)
    }
}

impl HealthSink for PlayerHealth {
    fn take_damage(&mut self, amount: u32) -> HealthStatus {
        if self.current == 0 {
            return HealthStatus::AlreadyDead;
        }
        self.current = self.current.saturating_sub(amount).min(self.max);
        if self.current == 0 {
            tracing::info!(damage = amount, "player died");
            HealthStatus::Died
        } else {
            tracing::debug!(damage = amount, remaining = self.current, "player damaged");
            HealthStatus::Alive(self.current)
        }
    }

    fn current_health(&self) -> u32 {
        self.current
    }

    fn max_health(&self) -> u32 {
        self.max
    }
}
