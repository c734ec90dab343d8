use crate::clock::Clock;
use crate::session::{parse_expiry, SessionStore};
use gloo::timers::callback::Interval;
use std::cell::Cell;
use std::rc::Rc;

/// Schedules a callback on a fixed period. Dropping the handle cancels it.
pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser interval timer
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// No expiry stored; the route gate handles the signed-out case
    Idle,
    Live,
    /// Expiry passed (or unreadable); the store has been cleared
    Expired,
}

/// One evaluation of the stored expiry
pub struct ExpiryCheck<C> {
    store: SessionStore,
    clock: C,
}

impl<C: Clock> ExpiryCheck<C> {
    pub fn new(store: SessionStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn run(&self) -> WatchOutcome {
        let Some(raw) = self.store.raw_expiry() else {
            return WatchOutcome::Idle;
        };

        let now = self.clock.now_ms();
        let expired = parse_expiry(&raw).map_or(true, |expiry| now > expiry);
        if !expired {
            return WatchOutcome::Live;
        }

        self.store.clear();
        tracing::info!(expiry = %raw, now, "session expired, signing out");
        WatchOutcome::Expired
    }
}

/// Background expiry watcher owned by the root view.
///
/// Checks once immediately on start, then on every tick. Stopping or
/// dropping the watcher cancels the timer, and any tick that is already
/// queued when that happens is ignored.
pub struct ExpiryWatcher<H> {
    active: Rc<Cell<bool>>,
    handle: Option<H>,
}

impl<H> ExpiryWatcher<H> {
    pub fn start<T, C, F>(
        ticker: &T,
        store: SessionStore,
        clock: C,
        period_ms: u32,
        on_expired: F,
    ) -> Self
    where
        T: Ticker<Handle = H>,
        C: Clock + 'static,
        F: Fn() + 'static,
    {
        let check = ExpiryCheck::new(store, clock);
        if check.run() == WatchOutcome::Expired {
            on_expired();
        }

        let active = Rc::new(Cell::new(true));
        let handle = {
            let active = active.clone();
            ticker.every(
                period_ms,
                Box::new(move || {
                    if active.get() && check.run() == WatchOutcome::Expired {
                        on_expired();
                    }
                }),
            )
        };

        Self {
            active,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn stop(&mut self) {
        self.active.set(false);
        self.handle.take();
    }
}

impl<H> Drop for ExpiryWatcher<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::SessionConfig;
    use crate::session::{MemoryBackend, SessionBackend, SessionState};
    use std::cell::RefCell;

    const NOW: i64 = 1_700_000_000_000;

    /// Ticker that fires only when the test says so
    #[derive(Clone, Default)]
    struct ManualTicker {
        ticks: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
        periods: Rc<RefCell<Vec<u32>>>,
    }

    impl ManualTicker {
        fn fire(&self) {
            for tick in self.ticks.borrow_mut().iter_mut() {
                tick();
            }
        }
    }

    impl Ticker for ManualTicker {
        type Handle = ();

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) {
            self.periods.borrow_mut().push(period_ms);
            self.ticks.borrow_mut().push(tick);
        }
    }

    fn redirect_counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hook = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, hook)
    }

    #[test]
    fn already_expired_session_is_caught_before_the_first_tick() {
        let ticker = ManualTicker::default();
        let store = SessionStore::in_memory();
        store.write("abc", NOW - 1);
        let (redirects, on_expired) = redirect_counter();

        let _watcher = ExpiryWatcher::start(
            &ticker,
            store.clone(),
            ManualClock::at(NOW),
            SessionConfig::WATCH_INTERVAL_MS,
            on_expired,
        );

        assert_eq!(redirects.get(), 1);
        assert_eq!(store.inspect(NOW), SessionState::Absent);
        assert_eq!(*ticker.periods.borrow(), vec![1_000]);
    }

    #[test]
    fn expiry_during_the_session_is_caught_on_the_next_tick() {
        let ticker = ManualTicker::default();
        let clock = ManualClock::at(NOW);
        let store = SessionStore::in_memory();
        store.write("abc", NOW + 1_500);
        let (redirects, on_expired) = redirect_counter();

        let _watcher =
            ExpiryWatcher::start(&ticker, store.clone(), clock.clone(), 1_000, on_expired);
        assert_eq!(redirects.get(), 0);

        clock.advance(1_000);
        ticker.fire();
        assert_eq!(redirects.get(), 0);
        assert!(store.read().is_some());

        clock.advance(1_000);
        ticker.fire();
        assert_eq!(redirects.get(), 1);
        assert_eq!(store.read(), None);

        // Nothing left to expire, so later ticks stay quiet
        ticker.fire();
        assert_eq!(redirects.get(), 1);
    }

    #[test]
    fn missing_expiry_is_left_to_the_route_gate() {
        let backend = MemoryBackend::new();
        backend.set(SessionConfig::TOKEN_KEY, "abc");
        let store = SessionStore::new(backend);
        let check = ExpiryCheck::new(store.clone(), ManualClock::at(NOW));

        assert_eq!(check.run(), WatchOutcome::Idle);
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn unreadable_expiry_is_treated_as_expired() {
        let backend = MemoryBackend::new();
        backend.set(SessionConfig::TOKEN_KEY, "abc");
        backend.set(SessionConfig::EXPIRY_KEY, "not-a-number");
        let store = SessionStore::new(backend);
        let check = ExpiryCheck::new(store.clone(), ManualClock::at(NOW));

        assert_eq!(check.run(), WatchOutcome::Expired);
        assert_eq!(store.inspect(NOW), SessionState::Absent);
    }

    #[test]
    fn stopped_watcher_ignores_queued_ticks() {
        let ticker = ManualTicker::default();
        let clock = ManualClock::at(NOW);
        let store = SessionStore::in_memory();
        store.write("abc", NOW + 10);
        let (redirects, on_expired) = redirect_counter();

        let mut watcher =
            ExpiryWatcher::start(&ticker, store.clone(), clock.clone(), 1_000, on_expired);
        assert!(watcher.is_active());
        watcher.stop();
        assert!(!watcher.is_active());

        clock.advance(1_000);
        ticker.fire();

        assert_eq!(redirects.get(), 0);
        assert!(store.read().is_some());
    }

    #[test]
    fn dropping_the_watcher_cancels_it() {
        let ticker = ManualTicker::default();
        let clock = ManualClock::at(NOW);
        let store = SessionStore::in_memory();
        store.write("abc", NOW + 10);
        let (redirects, on_expired) = redirect_counter();

        drop(ExpiryWatcher::start(
            &ticker,
            store.clone(),
            clock.clone(),
            1_000,
            on_expired,
        ));

        clock.advance(1_000);
        ticker.fire();
        assert_eq!(redirects.get(), 0);
    }
}
