//! Typewriter lines: type a line, hold, delete back to whatever the next line
//! shares with it, type the rest.

use std::ops::ControlFlow;

use crate::effects::clock::{Clock, Ticker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStep {
    Text(&'static str),
    Pause(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScript {
    pub steps: &'static [TypeStep],
    pub repeat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// The shown text changed.
    Typed(String),
    Waiting,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Typist {
    script: TypeScript,
    keystroke_ms: u32,
    shown: String,
    cursor: usize,
    hold: Option<u32>,
    finished: bool,
}

impl Typist {
    pub fn new(script: TypeScript, keystroke_ms: u32) -> Self {
        Self {
            script,
            keystroke_ms: keystroke_ms.max(1),
            shown: String::new(),
            cursor: 0,
            hold: None,
            finished: false,
        }
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    fn hold_ticks(&self, pause_ms: u32) -> u32 {
        pause_ms.div_ceil(self.keystroke_ms)
    }

    /// Advances by one keystroke interval.
    pub fn tick(&mut self) -> Keystroke {
        if self.finished {
            return Keystroke::Finished;
        }

        // a full pass over the script that changes nothing means it never will
        let mut idle = 0;
        while idle <= self.script.steps.len() {
            let Some(&step) = self.script.steps.get(self.cursor) else {
                if self.script.repeat && !self.script.steps.is_empty() {
                    self.cursor = 0;
                    idle += 1;
                    continue;
                }
                break;
            };

            match step {
                TypeStep::Pause(ms) => match self.hold.take() {
                    None if self.hold_ticks(ms) > 0 => {
                        self.hold = Some(self.hold_ticks(ms) - 1);
                        return Keystroke::Waiting;
                    }
                    Some(left) if left > 0 => {
                        self.hold = Some(left - 1);
                        return Keystroke::Waiting;
                    }
                    _ => {
                        self.cursor += 1;
                        idle += 1;
                    }
                },
                TypeStep::Text(line) => {
                    if self.shown == line {
                        self.cursor += 1;
                        idle += 1;
                        continue;
                    }
                    match line.strip_prefix(self.shown.as_str()).and_then(|rest| rest.chars().next()) {
                        Some(next) => self.shown.push(next),
                        None => {
                            self.shown.pop();
                        }
                    }
                    return Keystroke::Typed(self.shown.clone());
                }
            }
        }

        self.finished = true;
        Keystroke::Finished
    }
}

/// Types `script` into `sink` on `ticker`, replacing whatever it was driving.
pub fn play<C, S>(ticker: &mut Ticker<C>, script: TypeScript, keystroke_ms: u32, delay_ms: u32, sink: S)
where
    C: Clock,
    S: Fn(String) + 'static,
{
    let mut typist = Typist::new(script, keystroke_ms);
    sink(String::new());
    ticker.start(delay_ms, keystroke_ms, move || match typist.tick() {
        Keystroke::Typed(text) => {
            sink(text);
            ControlFlow::Continue(())
        }
        Keystroke::Waiting => ControlFlow::Continue(()),
        Keystroke::Finished => ControlFlow::Break(()),
    });
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::effects::clock::manual::ManualClock;

    fn typed(typist: &mut Typist, ticks: usize) -> Vec<Keystroke> {
        (0..ticks).map(|_| typist.tick()).collect()
    }

    #[test]
    fn types_pauses_then_extends_the_line() {
        const STEPS: &[TypeStep] = &[TypeStep::Text("ab"), TypeStep::Pause(100), TypeStep::Text("abc")];
        let mut typist = Typist::new(TypeScript { steps: STEPS, repeat: false }, 50);

        assert_eq!(
            typed(&mut typist, 6),
            vec![
                Keystroke::Typed("a".into()),
                Keystroke::Typed("ab".into()),
                Keystroke::Waiting,
                Keystroke::Waiting,
                Keystroke::Typed("abc".into()),
                Keystroke::Finished,
            ]
        );
        assert_eq!(typist.shown(), "abc");
        assert_eq!(typist.tick(), Keystroke::Finished);
    }

    #[test]
    fn deletes_back_to_the_shared_prefix() {
        const STEPS: &[TypeStep] = &[TypeStep::Text("Hold [H]"), TypeStep::Text("Hold [S]")];
        let mut typist = Typist::new(TypeScript { steps: STEPS, repeat: false }, 50);
        typed(&mut typist, 8);
        assert_eq!(typist.shown(), "Hold [H]");

        assert_eq!(
            typed(&mut typist, 5),
            vec![
                Keystroke::Typed("Hold [H".into()),
                Keystroke::Typed("Hold [".into()),
                Keystroke::Typed("Hold [S".into()),
                Keystroke::Typed("Hold [S]".into()),
                Keystroke::Finished,
            ]
        );
    }

    #[test]
    fn repeating_scripts_loop_forever() {
        const STEPS: &[TypeStep] = &[TypeStep::Text("ab"), TypeStep::Text("ac")];
        let mut typist = Typist::new(TypeScript { steps: STEPS, repeat: true }, 50);
        let keystrokes = typed(&mut typist, 40);
        assert!(keystrokes.iter().all(|k| matches!(k, Keystroke::Typed(_))));
        assert!(["ab", "ac", "a"].contains(&typist.shown()));
    }

    #[test]
    fn degenerate_scripts_finish_instead_of_spinning() {
        const SINGLE: &[TypeStep] = &[TypeStep::Text("x")];
        let mut typist = Typist::new(TypeScript { steps: SINGLE, repeat: true }, 50);
        assert_eq!(typist.tick(), Keystroke::Typed("x".into()));
        assert_eq!(typist.tick(), Keystroke::Finished);

        let mut empty = Typist::new(TypeScript { steps: &[], repeat: true }, 50);
        assert_eq!(empty.tick(), Keystroke::Finished);

        const ZERO_PAUSE: &[TypeStep] = &[TypeStep::Pause(0)];
        let mut paused = Typist::new(TypeScript { steps: ZERO_PAUSE, repeat: true }, 50);
        assert_eq!(paused.tick(), Keystroke::Finished);
    }

    #[test]
    fn non_ascii_lines_type_whole_chars() {
        const STEPS: &[TypeStep] = &[TypeStep::Text("på"), TypeStep::Text("pö")];
        let mut typist = Typist::new(TypeScript { steps: STEPS, repeat: false }, 50);
        assert_eq!(
            typed(&mut typist, 5),
            vec![
                Keystroke::Typed("p".into()),
                Keystroke::Typed("på".into()),
                Keystroke::Typed("p".into()),
                Keystroke::Typed("pö".into()),
                Keystroke::Finished,
            ]
        );
    }

    #[test]
    fn play_feeds_the_sink_and_stops_at_the_end() {
        const STEPS: &[TypeStep] = &[TypeStep::Text("ok")];
        let clock = ManualClock::default();
        let mut ticker = Ticker::new(clock.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |text: String| seen.borrow_mut().push(text)
        };

        play(&mut ticker, TypeScript { steps: STEPS, repeat: false }, 50, 0, sink);
        clock.advance(1_000);
        assert_eq!(*seen.borrow(), vec!["", "o", "ok"]);
        assert_eq!(clock.pending(), 0);
    }
}
