//! Single-slot timer for deferred flip-backs.

use std::time::Instant;

use crate::rules::FlipBack;

/// Holds at most one pending flip-back and its deadline.
///
/// Arming replaces whatever was pending. Only one mismatched pair can be
/// showing at a time, so an older ticket is always stale by then.
#[derive(Clone, Debug, Default)]
pub struct FlipBackTimer {
    pending: Option<(Instant, FlipBack)>,
}

impl FlipBackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `ticket` to fire `ticket.delay` after `now`.
    pub fn arm(&mut self, now: Instant, ticket: FlipBack) {
        self.pending = Some((now + ticket.delay, ticket));
    }

    /// Drop any pending flip-back.
    pub fn cancel(&mut self) -> Option<FlipBack> {
        self.pending.take().map(|(_, ticket)| ticket)
    }

    /// Take the pending ticket if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<FlipBack> {
        match self.pending {
            Some((deadline, _)) if deadline <= now => self.cancel(),
            _ => None,
        }
    }

    /// When the pending flip-back fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::GameId;

    fn ticket(epoch: u64) -> FlipBack {
        FlipBack {
            game: GameId::new(0),
            epoch,
            delay: Duration::from_millis(700),
        }
    }

    #[test]
    fn test_fires_only_after_deadline() {
        let start = Instant::now();
        let mut timer = FlipBackTimer::new();
        timer.arm(start, ticket(1));

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(700)));
        assert_eq!(timer.take_due(start + Duration::from_millis(699)), None);
        assert_eq!(timer.take_due(start + Duration::from_millis(700)), Some(ticket(1)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_replaces() {
        let start = Instant::now();
        let mut timer = FlipBackTimer::new();
        timer.arm(start, ticket(1));
        timer.arm(start + Duration::from_millis(100), ticket(2));

        assert_eq!(timer.take_due(start + Duration::from_millis(750)), None);
        assert_eq!(timer.take_due(start + Duration::from_millis(800)), Some(ticket(2)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = FlipBackTimer::new();
        timer.arm(start, ticket(1));

        assert_eq!(timer.cancel(), Some(ticket(1)));
        assert_eq!(timer.take_due(start + Duration::from_secs(5)), None);
    }
}
