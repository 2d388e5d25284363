//! Day/night clock.

use nightfarm_core::state::ClockView;

/// Countdown for the current day. `time_left` never goes negative and the
/// expiry is reported exactly once per started day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldClock {
    is_day: bool,
    time_left: f32,
    duration: f32,
    expired: bool,
}

impl WorldClock {
    pub fn new() -> Self {
        Self {
            is_day: false,
            time_left: 0.0,
            duration: 0.0,
            expired: true,
        }
    }

    /// Begin a day of `duration` seconds.
    pub fn start_day(&mut self, duration: f32) {
        let duration = duration.max(0.0);
        self.is_day = true;
        self.time_left = duration;
        self.duration = duration;
        self.expired = false;
    }

    /// Switch to night. The countdown stays at zero.
    pub fn start_night(&mut self) {
        self.is_day = false;
        self.time_left = 0.0;
        self.expired = true;
    }

    /// Count down by `dt`. Returns true on the tick the day runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_day || self.expired {
            return false;
        }
        if dt > 0.0 {
            self.time_left = (self.time_left - dt).max(0.0);
        }
        if self.time_left <= 0.0 {
            self.expired = true;
            return true;
        }
        false
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn view(&self) -> ClockView {
        ClockView {
            is_day: self.is_day,
            time_left_secs: self.time_left,
            duration_secs: self.duration,
        }
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new()
    }
}
