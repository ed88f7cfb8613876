//! The shell's live clock.
//!
//! One periodic timer per mounted shell: registered on first activation,
//! cancelled on teardown or drop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::utils::format::clock_label;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A host facility that fires a callback on a fixed period until cancelled.
pub trait Ticker {
    type Handle;

    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

pub struct ClockDriver<T: Ticker> {
    ticker: T,
    active: Option<T::Handle>,
}

impl<T: Ticker> ClockDriver<T> {
    pub fn new(ticker: T) -> Self {
        Self {
            ticker,
            active: None,
        }
    }

    /// Registers the periodic timer. A second call while active is a no-op.
    pub fn activate(&mut self, on_tick: impl FnMut() + 'static) {
        if self.active.is_some() {
            return;
        }
        debug!("[clock] registering {} ms tick", TICK_PERIOD.as_millis());
        self.active = Some(self.ticker.every(TICK_PERIOD, Box::new(on_tick)));
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn teardown(&mut self) {
        if let Some(handle) = self.active.take() {
            debug!("[clock] tick cancelled");
            self.ticker.cancel(handle);
        }
    }
}

impl<T: Ticker> Drop for ClockDriver<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Browser timer backed by `setInterval`.
#[cfg(feature = "web")]
pub struct IntervalTicker;

#[cfg(feature = "web")]
impl Ticker for IntervalTicker {
    type Handle = gloo_timers::callback::Interval;

    fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Self::Handle {
        gloo_timers::callback::Interval::new(period.as_millis() as u32, on_tick)
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

/// Native timer: a Dioxus task sleeping on the tokio runtime.
#[cfg(all(
    any(feature = "desktop", feature = "mobile"),
    not(feature = "web")
))]
pub struct TaskTicker;

#[cfg(all(
    any(feature = "desktop", feature = "mobile"),
    not(feature = "web")
))]
impl Ticker for TaskTicker {
    type Handle = Task;

    fn every(&self, period: Duration, mut on_tick: Box<dyn FnMut()>) -> Self::Handle {
        spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                on_tick();
            }
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}

/// Server renders have no timer host; the label is rendered once.
pub struct NoTicker;

impl Ticker for NoTicker {
    type Handle = ();

    fn every(&self, _period: Duration, _on_tick: Box<dyn FnMut()>) -> Self::Handle {}

    fn cancel(&self, _handle: Self::Handle) {}
}

/// Current wall-clock label, refreshed every second while the caller is mounted.
pub fn use_wall_clock() -> Signal<String> {
    #[cfg(feature = "web")]
    let ticker = IntervalTicker;
    #[cfg(all(
        any(feature = "desktop", feature = "mobile"),
        not(feature = "web")
    ))]
    let ticker = TaskTicker;
    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    let ticker = NoTicker;

    use_wall_clock_with(ticker)
}

/// [`use_wall_clock`] on an explicit ticker. Only the ticker passed on the
/// first render is used.
pub fn use_wall_clock_with<T>(ticker: T) -> Signal<String>
where
    T: Ticker + 'static,
    T::Handle: 'static,
{
    let now = use_signal(clock_label);

    let driver = use_hook(move || {
        let mut driver = ClockDriver::new(ticker);
        let mut now = now;
        driver.activate(move || now.set(clock_label()));
        Rc::new(RefCell::new(driver))
    });

    // teardown on unmount
    use_drop(move || driver.borrow_mut().teardown());

    now
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log {
        registered: usize,
        cancelled: Vec<usize>,
        callbacks: Vec<(usize, Box<dyn FnMut()>)>,
    }

    #[derive(Clone, Default)]
    struct FakeTicker(Rc<RefCell<Log>>);

    impl PartialEq for FakeTicker {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl FakeTicker {
        /// Fires every timer that has not been cancelled.
        fn fire(&self) {
            let mut log = self.0.borrow_mut();
            let Log {
                cancelled,
                callbacks,
                ..
            } = &mut *log;
            for (id, cb) in callbacks.iter_mut() {
                if !cancelled.contains(id) {
                    cb();
                }
            }
        }
    }

    impl Ticker for FakeTicker {
        type Handle = usize;

        fn every(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> usize {
            assert_eq!(period, TICK_PERIOD);
            let mut log = self.0.borrow_mut();
            let id = log.registered;
            log.registered += 1;
            log.callbacks.push((id, on_tick));
            id
        }

        fn cancel(&self, handle: usize) {
            self.0.borrow_mut().cancelled.push(handle);
        }
    }

    #[test]
    fn activation_registers_exactly_one_timer() {
        let ticker = FakeTicker::default();
        let mut driver = ClockDriver::new(ticker.clone());
        assert!(!driver.is_active());
        driver.activate(|| {});
        driver.activate(|| {});
        assert!(driver.is_active());
        assert_eq!(ticker.0.borrow().registered, 1);
    }

    #[test]
    fn no_tick_after_teardown() {
        let ticker = FakeTicker::default();
        let ticks = Rc::new(RefCell::new(0));
        let mut driver = ClockDriver::new(ticker.clone());
        let counter = ticks.clone();
        driver.activate(move || *counter.borrow_mut() += 1);

        ticker.fire();
        ticker.fire();
        assert_eq!(*ticks.borrow(), 2);

        driver.teardown();
        assert!(!driver.is_active());
        ticker.fire();
        assert_eq!(*ticks.borrow(), 2);
        assert_eq!(ticker.0.borrow().cancelled, vec![0]);
    }

    #[test]
    fn drop_cancels_once() {
        let ticker = FakeTicker::default();
        {
            let mut driver = ClockDriver::new(ticker.clone());
            driver.activate(|| {});
            driver.teardown();
        }
        assert_eq!(ticker.0.borrow().cancelled, vec![0]);

        {
            let mut driver = ClockDriver::new(ticker.clone());
            driver.activate(|| {});
        }
        assert_eq!(ticker.0.borrow().cancelled, vec![0, 1]);
    }

    #[test]
    fn inactive_driver_drops_quietly() {
        let ticker = FakeTicker::default();
        drop(ClockDriver::new(ticker.clone()));
        assert_eq!(ticker.0.borrow().registered, 0);
        assert!(ticker.0.borrow().cancelled.is_empty());
    }

    #[allow(non_snake_case)]
    #[component]
    fn ClockHarness(ticker: FakeTicker) -> Element {
        let now = use_wall_clock_with(ticker);
        rsx! {
            span { "{now}" }
        }
    }

    #[test]
    fn mounted_clock_registers_once_and_cancels_on_unmount() {
        let ticker = FakeTicker::default();
        let mut dom = VirtualDom::new_with_props(
            ClockHarness,
            ClockHarnessProps {
                ticker: ticker.clone(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("AM") || html.contains("PM"), "{html}");
        assert_eq!(ticker.0.borrow().registered, 1);
        assert!(ticker.0.borrow().cancelled.is_empty());

        drop(dom);
        assert_eq!(ticker.0.borrow().registered, 1);
        assert_eq!(ticker.0.borrow().cancelled, vec![0]);
    }

    #[test]
    fn server_ticker_never_fires() {
        let mut dom = VirtualDom::new(|| {
            let now = use_wall_clock_with(NoTicker);
            rsx! { "{now}" }
        });
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).is_empty());
    }
}
