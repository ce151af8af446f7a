//! Idle-session timer state machine.
//!
//! `Active → WarningShown → Expired`, driven by two inputs: tracked DOM
//! activity and clock advancement. Kept free of browser types so the
//! transitions are testable without a DOM; the hook in
//! [`crate::hooks::use_idle_logout`] wires it to events and an interval.

/// Timer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePhase {
    Active,
    WarningShown,
    Expired,
}

/// Transition produced by advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    /// The warning threshold was crossed; prompt the user.
    Warn,
    /// The full timeout elapsed; force logout.
    Expired,
}

/// Inactivity clock with a warning threshold.
#[derive(Debug, Clone)]
pub struct IdleTimer {
    timeout_ms: u64,
    warning_before_expiry_ms: u64,
    idle_ms: u64,
    phase: IdlePhase,
}

impl IdleTimer {
    /// `timeout_ms` is the full inactivity budget; the warning fires
    /// `warning_before_expiry_ms` ahead of it.
    pub fn new(timeout_ms: u64, warning_before_expiry_ms: u64) -> Self {
        debug_assert!(warning_before_expiry_ms < timeout_ms);
        Self {
            timeout_ms,
            warning_before_expiry_ms,
            idle_ms: 0,
            phase: IdlePhase::Active,
        }
    }

    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    /// Tracked activity zeroes the elapsed counter and returns to `Active`.
    /// Once expired the timer stays expired; logout is already underway.
    pub fn record_activity(&mut self) {
        if self.phase != IdlePhase::Expired {
            self.idle_ms = 0;
            self.phase = IdlePhase::Active;
        }
    }

    /// The user confirmed the warning prompt; equivalent to activity.
    pub fn confirm_continue(&mut self) {
        self.record_activity();
    }

    /// Advance the clock, returning the transition this step caused.
    pub fn advance(&mut self, delta_ms: u64) -> Option<IdleEvent> {
        if self.phase == IdlePhase::Expired {
            return None;
        }

        self.idle_ms = self.idle_ms.saturating_add(delta_ms);

        if self.idle_ms >= self.timeout_ms {
            self.phase = IdlePhase::Expired;
            return Some(IdleEvent::Expired);
        }

        if self.phase == IdlePhase::Active
            && self.idle_ms >= self.timeout_ms - self.warning_before_expiry_ms
        {
            self.phase = IdlePhase::WarningShown;
            return Some(IdleEvent::Warn);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: u64 = 5 * 60 * 1000;
    const WARNING: u64 = 60 * 1000;

    fn timer() -> IdleTimer {
        IdleTimer::new(TIMEOUT, WARNING)
    }

    fn tick_minutes(timer: &mut IdleTimer, minutes: u64) -> Vec<IdleEvent> {
        let mut events = Vec::new();
        for _ in 0..minutes * 60 {
            events.extend(timer.advance(1_000));
        }
        events
    }

    #[test]
    fn warns_at_four_minutes_and_expires_at_five() {
        let mut timer = timer();

        assert!(tick_minutes(&mut timer, 3).is_empty());
        assert_eq!(timer.phase(), IdlePhase::Active);

        assert_eq!(tick_minutes(&mut timer, 1), vec![IdleEvent::Warn]);
        assert_eq!(timer.phase(), IdlePhase::WarningShown);

        assert_eq!(tick_minutes(&mut timer, 1), vec![IdleEvent::Expired]);
        assert_eq!(timer.phase(), IdlePhase::Expired);
    }

    #[test]
    fn activity_resets_the_elapsed_counter() {
        let mut timer = timer();

        tick_minutes(&mut timer, 3);
        timer.record_activity();

        // Another 3 minutes stays short of the 4-minute warning mark.
        assert!(tick_minutes(&mut timer, 3).is_empty());
        assert_eq!(timer.phase(), IdlePhase::Active);

        assert_eq!(tick_minutes(&mut timer, 1), vec![IdleEvent::Warn]);
    }

    #[test]
    fn activity_during_warning_returns_to_active() {
        let mut timer = timer();

        tick_minutes(&mut timer, 4);
        assert_eq!(timer.phase(), IdlePhase::WarningShown);

        timer.record_activity();
        assert_eq!(timer.phase(), IdlePhase::Active);

        // The warning can fire again after a fresh 4 minutes.
        assert_eq!(tick_minutes(&mut timer, 4), vec![IdleEvent::Warn]);
    }

    #[test]
    fn confirming_the_prompt_resets_like_activity() {
        let mut timer = timer();

        tick_minutes(&mut timer, 4);
        timer.confirm_continue();
        assert_eq!(timer.phase(), IdlePhase::Active);
        assert!(tick_minutes(&mut timer, 3).is_empty());
    }

    #[test]
    fn unanswered_warning_expires_on_schedule() {
        let mut timer = timer();

        tick_minutes(&mut timer, 4);
        // One blocked interval later the whole remaining minute may arrive
        // as a single delta.
        assert_eq!(timer.advance(WARNING), Some(IdleEvent::Expired));
    }

    #[test]
    fn expired_is_terminal() {
        let mut timer = timer();

        tick_minutes(&mut timer, 5);
        assert_eq!(timer.phase(), IdlePhase::Expired);

        timer.record_activity();
        assert_eq!(timer.phase(), IdlePhase::Expired);
        assert!(timer.advance(60_000).is_none());
    }
}
