//! Battery accounting.
//!
//! Every successful translational move drains [`Battery::DRAIN_PER_MOVE`];
//! turns are free. The level never drops below zero and a recharge always
//! restores it to [`Battery::FULL`].

/// Charge level of the robot's battery, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battery {
    level: u8,
}

impl Battery {
    /// A fully charged battery.
    pub const FULL: u8 = 100;
    /// Charge consumed by one translational move.
    pub const DRAIN_PER_MOVE: u8 = 5;
    /// Levels at or below this are reported as critical.
    pub const CRITICAL: u8 = 20;

    #[must_use]
    pub const fn new() -> Self {
        Self { level: Self::FULL }
    }

    /// A battery at `level`, capped at [`Battery::FULL`].
    #[must_use]
    pub const fn with_level(level: u8) -> Self {
        Self {
            level: if level > Self::FULL { Self::FULL } else { level },
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Returns `true` if there is enough charge for one more move.
    #[must_use]
    pub const fn can_move(self) -> bool {
        self.level >= Self::DRAIN_PER_MOVE
    }

    /// Consume one move's worth of charge, clamping at zero.
    pub fn drain(&mut self) {
        self.level = self.level.saturating_sub(Self::DRAIN_PER_MOVE);
    }

    pub fn recharge(&mut self) {
        self.level = Self::FULL;
    }

    #[must_use]
    pub const fn is_critical(self) -> bool {
        self.level <= Self::CRITICAL
    }

    /// `"CRITICAL"` or `"OK"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.is_critical() { "CRITICAL" } else { "OK" }
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::new()
    }
}
