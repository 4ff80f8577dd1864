//! Press-and-hold detection on top of a [`Clock`].

use log::debug;

use crate::effects::clock::Clock;

/// Fires once a press has lasted `hold_ms`. Releasing, leaving, pressing
/// again or dropping the detector first cancels the pending hold.
pub struct HoldDetector<C: Clock> {
    clock: C,
    hold_ms: u32,
    pending: Option<C::Once>,
}

impl<C: Clock> HoldDetector<C> {
    pub fn new(clock: C, hold_ms: u32) -> Self {
        Self {
            clock,
            hold_ms,
            pending: None,
        }
    }

    pub fn press(&mut self, on_hold: impl FnOnce() + 'static) {
        self.pending = Some(self.clock.once(self.hold_ms, on_hold));
    }

    /// Pointer lifted or left the target.
    pub fn release(&mut self) {
        if self.pending.take().is_some() {
            debug!("press released");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::config;
    use crate::effects::clock::manual::ManualClock;

    fn detector() -> (ManualClock, HoldDetector<ManualClock>, Rc<Cell<u32>>) {
        let clock = ManualClock::default();
        let detector = HoldDetector::new(clock.clone(), config::LONG_PRESS_MS);
        (clock, detector, Rc::new(Cell::new(0)))
    }

    fn counting(holds: &Rc<Cell<u32>>) -> impl FnOnce() + 'static {
        let holds = Rc::clone(holds);
        move || holds.set(holds.get() + 1)
    }

    #[test]
    fn releasing_just_before_the_threshold_does_not_fire() {
        let (clock, mut detector, holds) = detector();
        detector.press(counting(&holds));
        clock.advance(499);
        detector.release();

        clock.advance(1_000);
        assert_eq!(holds.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn holding_to_the_threshold_fires_once() {
        let (clock, mut detector, holds) = detector();
        detector.press(counting(&holds));
        clock.advance(500);
        assert_eq!(holds.get(), 1);

        detector.release();
        clock.advance(1_000);
        assert_eq!(holds.get(), 1);
    }

    #[test]
    fn pressing_again_restarts_the_hold() {
        let (clock, mut detector, holds) = detector();
        detector.press(counting(&holds));
        clock.advance(300);
        detector.press(counting(&holds));
        clock.advance(300);
        assert_eq!(holds.get(), 0);

        clock.advance(200);
        assert_eq!(holds.get(), 1);
    }

    #[test]
    fn dropping_the_detector_cancels_the_pending_hold() {
        let (clock, mut detector, holds) = detector();
        detector.press(counting(&holds));
        clock.advance(100);
        assert_eq!(clock.pending(), 1);

        drop(detector);
        clock.advance(1_000);
        assert_eq!(holds.get(), 0);
        assert_eq!(clock.pending(), 0);
    }
}
