//! Owner notification strategy
//!
//! The notifier decides when a qualifying keystroke reaches the owner. A
//! debounced notifier holds at most one pending value; scheduling again
//! replaces it, so only the last value of a burst is ever delivered.

use super::options::ZeroDelayPolicy;
use std::time::{Duration, Instant};

/// How keystrokes turn into owner notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyStrategy {
    /// Deliver synchronously
    Immediate,
    /// Never deliver
    Suppressed,
    /// Deliver the latest value once the period passes without another call
    Debounced(Duration),
}

impl NotifyStrategy {
    pub fn from_period(millis: i64, zero_delay: ZeroDelayPolicy) -> Self {
        if millis > 0 {
            Self::Debounced(Duration::from_millis(millis as u64))
        } else {
            match zero_delay {
                ZeroDelayPolicy::Immediate => Self::Immediate,
                ZeroDelayPolicy::Suppress => Self::Suppressed,
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    due: Instant,
}

/// Owned notifier with its single pending slot
#[derive(Debug)]
pub struct Notifier {
    strategy: NotifyStrategy,
    pending: Option<Pending>,
}

impl Notifier {
    pub fn new(strategy: NotifyStrategy) -> Self {
        Self {
            strategy,
            pending: None,
        }
    }

    pub fn strategy(&self) -> NotifyStrategy {
        self.strategy
    }

    /// Offer a value. Returns it when it must be delivered right away.
    pub fn notify(&mut self, value: String, now: Instant) -> Option<String> {
        match self.strategy {
            NotifyStrategy::Immediate => Some(value),
            NotifyStrategy::Suppressed => {
                tracing::trace!("Notification suppressed");
                None
            }
            NotifyStrategy::Debounced(period) => {
                if let Some(previous) = self.pending.take() {
                    tracing::trace!("Superseding pending value {:?}", previous.value);
                }
                self.pending = Some(Pending {
                    value,
                    due: now + period,
                });
                None
            }
        }
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value, returning it
    pub fn cancel(&mut self) -> Option<String> {
        let dropped = self.pending.take().map(|p| p.value);
        if let Some(ref value) = dropped {
            tracing::trace!("Cancelled pending value {:?}", value);
        }
        dropped
    }

    /// Swap the strategy. Any pending value is cancelled first.
    pub fn replace(&mut self, strategy: NotifyStrategy) {
        self.cancel();
        self.strategy = strategy;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending value becomes due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(300);

    #[test]
    fn test_immediate_returns_value() {
        let mut notifier = Notifier::new(NotifyStrategy::Immediate);
        assert_eq!(notifier.notify("x".into(), Instant::now()), Some("x".to_string()));
        assert!(!notifier.has_pending());
    }

    #[test]
    fn test_suppressed_drops_value() {
        let mut notifier = Notifier::new(NotifyStrategy::Suppressed);
        let now = Instant::now();
        assert_eq!(notifier.notify("x".into(), now), None);
        assert_eq!(notifier.poll(now + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let mut notifier = Notifier::new(NotifyStrategy::Debounced(PERIOD));
        let t0 = Instant::now();

        assert_eq!(notifier.notify("abc".into(), t0), None);
        assert_eq!(notifier.notify("abcd".into(), t0 + Duration::from_millis(100)), None);
        let last = t0 + Duration::from_millis(250);
        assert_eq!(notifier.notify("abcde".into(), last), None);

        // 300ms after the first call is still inside the quiet window
        assert_eq!(notifier.poll(t0 + PERIOD), None);
        assert_eq!(notifier.poll(last + PERIOD - Duration::from_millis(1)), None);
        assert_eq!(notifier.poll(last + PERIOD), Some("abcde".to_string()));
        assert_eq!(notifier.poll(last + PERIOD * 2), None);
    }

    #[test]
    fn test_time_until_due() {
        let mut notifier = Notifier::new(NotifyStrategy::Debounced(PERIOD));
        let t0 = Instant::now();
        assert_eq!(notifier.time_until_due(t0), None);

        notifier.notify("abc".into(), t0);
        assert_eq!(
            notifier.time_until_due(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(notifier.time_until_due(t0 + PERIOD * 2), Some(Duration::ZERO));
    }

    #[test]
    fn test_replace_cancels_pending() {
        let mut notifier = Notifier::new(NotifyStrategy::Debounced(PERIOD));
        let t0 = Instant::now();
        notifier.notify("stale".into(), t0);

        notifier.replace(NotifyStrategy::Debounced(Duration::from_millis(50)));
        assert!(!notifier.has_pending());
        assert_eq!(notifier.poll(t0 + PERIOD), None);
    }

    #[test]
    fn test_period_mapping() {
        assert_eq!(
            NotifyStrategy::from_period(0, ZeroDelayPolicy::Immediate),
            NotifyStrategy::Immediate
        );
        assert_eq!(
            NotifyStrategy::from_period(-20, ZeroDelayPolicy::Suppress),
            NotifyStrategy::Suppressed
        );
        assert_eq!(
            NotifyStrategy::from_period(5, ZeroDelayPolicy::Suppress),
            NotifyStrategy::Debounced(Duration::from_millis(5))
        );
    }
}
