//! Timer plumbing shared by the text effects.
//!
//! A [`Clock`] hands out timer handles that cancel themselves when dropped.
//! In the browser those are `gloo-timers` handles; tests drive a manual clock
//! instead so the effects can run natively.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

pub trait Clock: Clone + 'static {
    /// Pending one-shot timer. Dropping it cancels the callback.
    type Once: 'static;
    /// Repeating timer. Dropping it stops the ticks.
    type Every: 'static;

    fn once(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Once;
    fn every(&self, period_ms: u32, callback: impl FnMut() + 'static) -> Self::Every;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    type Once = Timeout;
    type Every = Interval;

    fn once(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn every(&self, period_ms: u32, callback: impl FnMut() + 'static) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// Owns the timers of one animated slot: at most one pending start delay and
/// at most one repeating tick. Starting again or dropping the ticker cancels
/// both, so a slot never has two runs writing into it.
pub struct Ticker<C: Clock> {
    clock: C,
    start: Option<C::Once>,
    every: Rc<RefCell<Option<C::Every>>>,
}

impl<C: Clock> Ticker<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            start: None,
            every: Rc::new(RefCell::new(None)),
        }
    }

    /// Waits `delay_ms`, then calls `step` every `period_ms` until it breaks.
    pub fn start<F>(&mut self, delay_ms: u32, period_ms: u32, mut step: F)
    where
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        self.stop();

        let clock = self.clock.clone();
        let every = Rc::clone(&self.every);
        self.start = Some(self.clock.once(delay_ms, move || {
            let own_slot = Rc::clone(&every);
            let handle = clock.every(period_ms, move || {
                if step().is_break() {
                    own_slot.borrow_mut().take();
                }
            });
            *every.borrow_mut() = Some(handle);
        }));
    }

    pub fn stop(&mut self) {
        self.start.take();
        self.every.borrow_mut().take();
    }

    pub fn is_ticking(&self) -> bool {
        self.every.borrow().is_some()
    }
}

impl<C: Clock> Drop for Ticker<C> {
    fn drop(&mut self) {
        // the tick closure holds a clone of `every`; clearing it breaks the cycle
        self.stop();
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Clock;

    enum Callback {
        Once(Box<dyn FnOnce()>),
        Every { period_ms: u64, callback: Box<dyn FnMut()> },
    }

    struct Timer {
        id: u64,
        due: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Callback,
    }

    #[derive(Default)]
    struct Timeline {
        now: u64,
        next_id: u64,
        timers: Vec<Timer>,
    }

    /// Timer handle of the manual clock; cancels on drop like gloo's.
    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    /// Deterministic clock advanced by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        timeline: Rc<RefCell<Timeline>>,
    }

    impl ManualClock {
        fn schedule(&self, delay_ms: u64, callback: Callback) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut timeline = self.timeline.borrow_mut();
            let id = timeline.next_id;
            timeline.next_id += 1;
            let due = timeline.now + delay_ms;
            timeline.timers.push(Timer {
                id,
                due,
                cancelled: Rc::clone(&cancelled),
                callback,
            });
            ManualHandle(cancelled)
        }

        pub fn now(&self) -> u64 {
            self.timeline.borrow().now
        }

        /// Live timers, one-shot or repeating.
        pub fn pending(&self) -> usize {
            self.timeline
                .borrow()
                .timers
                .iter()
                .filter(|timer| !timer.cancelled.get())
                .count()
        }

        /// Moves time forward, firing every timer that comes due on the way.
        pub fn advance(&self, ms: u64) {
            let until = self.now() + ms;
            loop {
                let next = {
                    let mut timeline = self.timeline.borrow_mut();
                    timeline.timers.retain(|timer| !timer.cancelled.get());
                    let index = timeline
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, timer)| timer.due <= until)
                        .min_by_key(|(_, timer)| (timer.due, timer.id))
                        .map(|(index, _)| index);
                    match index {
                        Some(index) => {
                            let timer = timeline.timers.remove(index);
                            timeline.now = timer.due;
                            timer
                        }
                        None => break,
                    }
                };

                let Timer { id, due, cancelled, callback } = next;
                match callback {
                    Callback::Once(callback) => callback(),
                    Callback::Every { period_ms, mut callback } => {
                        callback();
                        if !cancelled.get() {
                            self.timeline.borrow_mut().timers.push(Timer {
                                id,
                                due: due + period_ms,
                                cancelled,
                                callback: Callback::Every { period_ms, callback },
                            });
                        }
                    }
                }
            }
            self.timeline.borrow_mut().now = until;
        }
    }

    impl Clock for ManualClock {
        type Once = ManualHandle;
        type Every = ManualHandle;

        fn once(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> ManualHandle {
            self.schedule(u64::from(delay_ms), Callback::Once(Box::new(callback)))
        }

        fn every(&self, period_ms: u32, callback: impl FnMut() + 'static) -> ManualHandle {
            let period_ms = u64::from(period_ms.max(1));
            self.schedule(
                period_ms,
                Callback::Every {
                    period_ms,
                    callback: Box::new(callback),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualClock;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn ticker_waits_for_the_delay_then_ticks_until_break() {
        let clock = ManualClock::default();
        let mut ticker = Ticker::new(clock.clone());
        let count = Rc::new(Cell::new(0));

        let seen = Rc::clone(&count);
        ticker.start(100, 10, move || {
            seen.set(seen.get() + 1);
            if seen.get() == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        clock.advance(99);
        assert_eq!(count.get(), 0);
        assert!(!ticker.is_ticking());

        clock.advance(11);
        assert_eq!(count.get(), 1);
        assert!(ticker.is_ticking());

        clock.advance(1_000);
        assert_eq!(count.get(), 3);
        assert!(!ticker.is_ticking());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn restarting_cancels_the_pending_delay() {
        let clock = ManualClock::default();
        let mut ticker = Ticker::new(clock.clone());
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let hits = Rc::clone(&first);
        ticker.start(50, 10, move || {
            hits.set(hits.get() + 1);
            ControlFlow::Continue(())
        });
        let hits = Rc::clone(&second);
        ticker.start(50, 10, move || {
            hits.set(hits.get() + 1);
            ControlFlow::Break(())
        });

        clock.advance(500);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn dropping_the_ticker_clears_every_timer() {
        let clock = ManualClock::default();
        let mut ticker = Ticker::new(clock.clone());
        ticker.start(0, 10, || ControlFlow::Continue(()));
        clock.advance(25);
        assert!(ticker.is_ticking());
        assert_eq!(clock.pending(), 1);

        drop(ticker);
        assert_eq!(clock.pending(), 0);
    }
}
