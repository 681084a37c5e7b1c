//! Timer-driven refetching for list views.
//!
//! A page calls [`use_polling`] once while it is being built: the tick runs
//! immediately, then on every interval until the page's reactive owner is
//! disposed. Fetches started by ticks, refresh buttons and submissions are not
//! serialized, so each list keeps a [`RequestGeneration`] and applies a
//! response only when its [`Ticket`] is still the latest one issued.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::log;

/// Marks one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic counter shared by every fetch of one list.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration(Rc<Cell<u64>>);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every ticket issued before it.
    pub fn issue(&self) -> Ticket {
        let next = self.0.get() + 1;
        self.0.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.get() == ticket.0
    }

    /// Supersedes every outstanding ticket when the current reactive owner is
    /// disposed. Responses that land after that are dropped before they reach
    /// the owner's signals.
    pub fn expire_on_cleanup(&self) {
        let generation = self.clone();
        leptos::on_cleanup(move || {
            generation.issue();
        });
    }
}

/// Runs `tick` now and every `period` afterwards, for as long as the current
/// reactive owner lives. Under SSR nothing is scheduled; data loads once the
/// page is running in the browser.
pub fn use_polling<F>(label: &'static str, period: Duration, tick: F)
where
    F: Fn() + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;
        use leptos::on_cleanup;

        tick();

        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(millis, move || tick());
        log!("[POLL] {} every {}ms", label, millis);

        on_cleanup(move || {
            interval.cancel();
            log!("[POLL] {} stopped", label);
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (period, tick);
        log!("[POLL] {} deferred to the client", label);
    }
}
