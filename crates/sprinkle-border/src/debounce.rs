//! Resize debouncing.
//!
//! A burst of resize events must collapse into exactly one regeneration,
//! fired only after the burst has been quiet for the full window. Each
//! trigger invalidates the previous pending firing and schedules a new one;
//! this is debounce, not throttle.
//!
//! The debouncer only delivers notifications. All container mutation happens
//! on the host loop that drains [`Debouncer::notifications`], never on a
//! timer thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default quiescence window between the last resize event and regeneration.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(150);

/// Explicit debouncer owning its pending-trigger state.
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        let (tx, rx) = channel();
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
            tx,
            rx,
        }
    }

    /// Creates a debouncer with the stock 150ms window.
    pub fn with_default_quiescence() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }

    /// The configured quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arms (or re-arms) the quiescence window.
    ///
    /// Any pending firing is invalidated; only the latest trigger in a burst
    /// delivers a notification, after its full window elapses.
    pub fn trigger(&self) {
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let tx = self.tx.clone();
        let window = self.window;
        thread::spawn(move || {
            thread::sleep(window);
            // Stale timers lose: a newer trigger has bumped the generation.
            if generation.load(Ordering::SeqCst) == armed {
                let _ = tx.send(());
            }
        });
    }

    /// Invalidates any pending firing without scheduling a new one.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Receiver the host loop drains; one message per quiescent burst.
    pub fn notifications(&self) -> &Receiver<()> {
        &self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::RecvTimeoutError;

    // Windows short enough to keep the suite fast but long enough to
    // dominate scheduling noise.
    const WINDOW: Duration = Duration::from_millis(50);

    #[test]
    fn single_trigger_fires_once() {
        let debouncer = Debouncer::new(WINDOW);
        debouncer.trigger();
        debouncer
            .notifications()
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
        // Nothing further.
        assert_eq!(
            debouncer.notifications().recv_timeout(WINDOW * 3),
            Err(RecvTimeoutError::Timeout)
        );
    }

    #[test]
    fn burst_collapses_to_one_firing() {
        let debouncer = Debouncer::new(WINDOW);
        for _ in 0..8 {
            debouncer.trigger();
            thread::sleep(Duration::from_millis(5));
        }
        debouncer
            .notifications()
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
        assert_eq!(
            debouncer.notifications().recv_timeout(WINDOW * 3),
            Err(RecvTimeoutError::Timeout)
        );
    }

    #[test]
    fn cancel_pending_suppresses_the_firing() {
        let debouncer = Debouncer::new(WINDOW);
        debouncer.trigger();
        debouncer.cancel_pending();
        assert_eq!(
            debouncer.notifications().recv_timeout(WINDOW * 4),
            Err(RecvTimeoutError::Timeout)
        );
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let debouncer = Debouncer::new(WINDOW);
        debouncer.trigger();
        debouncer
            .notifications()
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
        debouncer.trigger();
        debouncer
            .notifications()
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
    }
}
