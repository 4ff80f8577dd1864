//! Text "decryption": a target string resolves out of random glyphs, one
//! position at a time from the left.
//!
//! [`DecryptRun`] is the pure state machine. [`play`] binds a run to a
//! [`Ticker`] so the frames reach a display slot on a timer.

use std::ops::ControlFlow;

use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config;
use crate::effects::clock::{Clock, Ticker};
use crate::error::EffectError;

pub const CIPHER_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789*&<>()[]#@!?%";

const LOCK_TOLERANCE: f64 = 1e-9;

/// Uniform index source used to fill unresolved positions.
pub trait GlyphSource {
    /// Returns an index in `0..upper`; `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

pub struct RandomGlyphs<R>(pub R);

impl RandomGlyphs<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> GlyphSource for RandomGlyphs<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(glyphs: &str) -> Result<Self, EffectError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(EffectError::EmptyAlphabet);
        }
        Ok(Self(glyphs))
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.0.contains(&glyph)
    }

    fn draw(&self, source: &mut impl GlyphSource) -> char {
        self.0[source.pick(self.0.len()) % self.0.len()]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self(CIPHER_GLYPHS.chars().collect())
    }
}

/// Fraction of a glyph locked per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRate(f64);

impl RevealRate {
    pub fn new(per_tick: f64) -> Result<Self, EffectError> {
        if !per_tick.is_finite() || per_tick <= 0.0 {
            return Err(EffectError::InvalidRevealRate(per_tick));
        }
        Ok(Self(per_tick))
    }

    /// One glyph locks every `ticks` ticks.
    pub fn one_glyph_every(ticks: u32) -> Self {
        Self(1.0 / f64::from(ticks.max(1)))
    }

    pub fn per_tick(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecryptSettings {
    pub tick_ms: u32,
    pub rate: RevealRate,
    pub alphabet: Alphabet,
}

impl Default for DecryptSettings {
    fn default() -> Self {
        Self {
            tick_ms: config::DECRYPT_TICK_MS,
            rate: RevealRate::one_glyph_every(4),
            alphabet: Alphabet::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub text: String,
    /// Resolved count at the moment the frame was drawn.
    pub resolved: f64,
    pub is_final: bool,
}

#[derive(Debug, Clone)]
pub struct DecryptRun {
    target: Vec<char>,
    rate: RevealRate,
    alphabet: Alphabet,
    ticks: u32,
    settled: bool,
}

impl DecryptRun {
    pub fn new(target: &str, settings: &DecryptSettings) -> Self {
        Self {
            target: target.chars().collect(),
            rate: settings.rate,
            alphabet: settings.alphabet.clone(),
            ticks: 0,
            settled: false,
        }
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    /// Derived from the tick count rather than accumulated, so rates such as
    /// 1/3 land exactly on whole glyphs.
    pub fn resolved(&self) -> f64 {
        (f64::from(self.ticks) * self.rate.per_tick()).min(self.target.len() as f64)
    }

    pub fn locked(&self) -> usize {
        let locked = (f64::from(self.ticks) * self.rate.per_tick() + LOCK_TOLERANCE).floor();
        (locked as usize).min(self.target.len())
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// An empty target has nothing to scramble and is shown as-is.
    pub fn needs_ticks(&self) -> bool {
        !self.settled && !self.target.is_empty()
    }

    /// Draws the next frame, or `None` once the final frame went out.
    pub fn tick(&mut self, glyphs: &mut impl GlyphSource) -> Option<Frame> {
        if self.settled {
            return None;
        }

        let locked = self.locked();
        let resolved = self.resolved();
        if locked >= self.target.len() {
            self.settled = true;
            return Some(Frame {
                text: self.target_text(),
                resolved,
                is_final: true,
            });
        }

        let alphabet = &self.alphabet;
        let text = self
            .target
            .iter()
            .enumerate()
            .map(|(index, &glyph)| if index < locked { glyph } else { alphabet.draw(&mut *glyphs) })
            .collect();
        self.ticks = self.ticks.saturating_add(1);

        Some(Frame {
            text,
            resolved,
            is_final: false,
        })
    }

    pub fn frames<G: GlyphSource>(self, glyphs: G) -> Frames<G> {
        Frames { run: self, glyphs }
    }
}

/// Lazy frame sequence of a run, ending with the target itself.
pub struct Frames<G> {
    run: DecryptRun,
    glyphs: G,
}

impl<G: GlyphSource> Iterator for Frames<G> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.run.tick(&mut self.glyphs)
    }
}

/// Starts decrypting `target` into `sink` on `ticker`, replacing whatever run
/// the ticker was driving. The slot shows the target verbatim until the
/// delayed start.
pub fn play<C, G, S>(
    ticker: &mut Ticker<C>,
    target: &str,
    delay_ms: u32,
    settings: &DecryptSettings,
    mut glyphs: G,
    sink: S,
) where
    C: Clock,
    G: GlyphSource + 'static,
    S: Fn(String) + 'static,
{
    if ticker.is_ticking() {
        debug!("cancelling running decryption");
    }
    ticker.stop();

    let mut run = DecryptRun::new(target, settings);
    sink(run.target_text());
    if !run.needs_ticks() {
        return;
    }

    debug!("decrypting {} glyphs after {}ms", target.chars().count(), delay_ms);
    ticker.start(delay_ms, settings.tick_ms, move || match run.tick(&mut glyphs) {
        Some(frame) => {
            let is_final = frame.is_final;
            sink(frame.text);
            if is_final {
                debug!("decryption settled");
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
        None => ControlFlow::Break(()),
    });
}
