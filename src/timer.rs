use std::time::{Duration, Instant};

/// Fixed-period tick timer that only runs while the game is active.
///
/// The timer holds no game data. Whoever handles a firing reads the state
/// current at that moment.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    period: Duration,
    next_fire: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Arms or cancels the timer to follow `active`.
    ///
    /// Arming schedules the first firing one full period after `now`. Calling
    /// with an unchanged `active` keeps the current schedule.
    pub fn sync(&mut self, active: bool, now: Instant) {
        match (active, self.next_fire) {
            (true, None) => self.next_fire = Some(now + self.period),
            (false, Some(_)) => self.next_fire = None,
            _ => {}
        }
    }

    /// Returns true when a period has elapsed, scheduling the next one.
    ///
    /// At most one firing is reported per call; a late caller does not get a
    /// burst of catch-up ticks.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_fire else {
            return false;
        };

        if now < deadline {
            return false;
        }

        self.next_fire = Some(now + self.period);
        true
    }

    /// Time left until the next firing, or `None` while disarmed.
    #[must_use]
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.next_fire
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
