use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::timers::{BrowserScheduler, Scheduler};

/// A flag that goes up once, `delay_ms` after arming. Dropping it before then
/// cancels the timer.
pub struct DelayedFlag<H> {
    raised: Rc<Cell<bool>>,
    _timer: H,
}

impl<H> DelayedFlag<H> {
    pub fn arm<S>(scheduler: &S, delay_ms: u32, on_raise: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let raised = Rc::new(Cell::new(false));
        let timer = {
            let raised = raised.clone();
            scheduler.schedule(
                delay_ms,
                Box::new(move || {
                    raised.set(true);
                    on_raise();
                }),
            )
        };
        Self {
            raised,
            _timer: timer,
        }
    }

    pub fn is_raised(&self) -> bool {
        self.raised.get()
    }
}

/// `false` on every fresh mount, `true` once `delay_ms` has passed. The timer
/// dies with the component.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let flag = use_state(|| false);
    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let armed = DelayedFlag::arm(&BrowserScheduler, *delay_ms, move || flag.set(true));
                move || drop(armed)
            },
            delay_ms,
        );
    }
    *flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FIRST_LINE_DELAY_MS, SECOND_LINE_DELAY_MS};
    use crate::timers::manual::ManualScheduler;

    #[test]
    fn headline_flags_rise_on_their_own_delays() {
        let scheduler = ManualScheduler::default();
        let first = DelayedFlag::arm(&scheduler, FIRST_LINE_DELAY_MS, || ());
        let second = DelayedFlag::arm(&scheduler, SECOND_LINE_DELAY_MS, || ());

        assert!(!first.is_raised());
        assert!(!second.is_raised());

        scheduler.advance(2_499);
        assert!(!first.is_raised());
        assert!(!second.is_raised());

        scheduler.advance(1);
        assert!(first.is_raised());
        assert!(!second.is_raised());

        scheduler.advance(1_999);
        assert!(!second.is_raised());

        scheduler.advance(1);
        assert!(second.is_raised());
    }

    #[test]
    fn raise_callback_runs_once() {
        let scheduler = ManualScheduler::default();
        let raises = Rc::new(Cell::new(0));
        let counter = raises.clone();
        let flag = DelayedFlag::arm(&scheduler, 10, move || counter.set(counter.get() + 1));

        scheduler.advance(10_000);
        assert!(flag.is_raised());
        assert_eq!(raises.get(), 1);
    }

    #[test]
    fn dropping_before_delay_cancels() {
        let scheduler = ManualScheduler::default();
        let raises = Rc::new(Cell::new(0));
        let counter = raises.clone();
        let flag = DelayedFlag::arm(&scheduler, FIRST_LINE_DELAY_MS, move || {
            counter.set(counter.get() + 1)
        });

        scheduler.advance(1_000);
        drop(flag);
        scheduler.advance(10_000);
        assert_eq!(raises.get(), 0);
    }

    #[test]
    fn rearming_starts_lowered() {
        let scheduler = ManualScheduler::default();
        let first_visit = DelayedFlag::arm(&scheduler, FIRST_LINE_DELAY_MS, || ());
        scheduler.advance(3_000);
        assert!(first_visit.is_raised());
        drop(first_visit);

        let second_visit = DelayedFlag::arm(&scheduler, FIRST_LINE_DELAY_MS, || ());
        assert!(!second_visit.is_raised());
        scheduler.advance(2_500);
        assert!(second_visit.is_raised());
    }
}
