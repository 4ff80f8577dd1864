use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::controls;
use crate::effects::clock::{BrowserClock, Ticker};
use crate::effects::decrypt::{self, DecryptSettings, RandomGlyphs};
use crate::effects::press::HoldDetector;
use crate::effects::scroll::{scroll_fraction, SectionReveal, Span};
use crate::effects::typing::{self, TypeScript};

const REVEAL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Current frame of a decryption run for `text`. A new text or delay tears
/// the old run down before the new one is scheduled.
#[hook]
pub fn use_decrypting_text(text: AttrValue, delay_ms: u32, settings: DecryptSettings) -> String {
    let shown = use_state_eq(|| text.to_string());

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(text, delay_ms, settings)| {
                let mut ticker = Ticker::new(BrowserClock);
                decrypt::play(
                    &mut ticker,
                    text,
                    *delay_ms,
                    settings,
                    RandomGlyphs::thread(),
                    move |frame| shown.set(frame),
                );
                move || drop(ticker)
            },
            (text, delay_ms, settings),
        );
    }

    (*shown).clone()
}

#[hook]
pub fn use_typed_text(script: TypeScript, keystroke_ms: u32, delay_ms: u32) -> String {
    let shown = use_state_eq(String::new);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(script, keystroke_ms, delay_ms)| {
                let mut ticker = Ticker::new(BrowserClock);
                typing::play(&mut ticker, *script, *keystroke_ms, *delay_ms, move |text| {
                    shown.set(text)
                });
                move || drop(ticker)
            },
            (script, keystroke_ms, delay_ms),
        );
    }

    (*shown).clone()
}

/// Inline style for a section fading through the viewport.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, reveal: SectionReveal) -> String {
    let style = use_state_eq(|| reveal.style_at(0.0));

    {
        let style = style.clone();
        use_effect_with_deps(
            move |(node, reveal)| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let measure = {
                            let window = window.clone();
                            let node = node.clone();
                            let reveal = reveal.clone();
                            move || {
                                let Some(element) = node.cast::<Element>() else {
                                    return;
                                };
                                let viewport = window
                                    .inner_height()
                                    .ok()
                                    .and_then(|height| height.as_f64())
                                    .unwrap_or_default();
                                let rect = element.get_bounding_client_rect();
                                let fraction = scroll_fraction(
                                    Span::new(rect.top(), rect.height()),
                                    Span::new(0.0, viewport),
                                );
                                style.set(reveal.style_at(fraction));
                            }
                        };
                        measure();

                        let listener = Closure::<dyn Fn()>::new(measure);
                        for event in REVEAL_EVENTS {
                            if window
                                .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                                .is_err()
                            {
                                warn!("could not listen for {} on window", event);
                            }
                        }

                        Box::new(move || {
                            for event in REVEAL_EVENTS {
                                let _ = window.remove_event_listener_with_callback(
                                    event,
                                    listener.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    None => {
                        warn!("no window, sections stay at their resting style");
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (node, reveal),
        );
    }

    (*style).clone()
}

/// False until `delay_ms` after mount.
#[hook]
pub fn use_elapsed(delay_ms: u32) -> bool {
    let elapsed = use_state_eq(|| false);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = Timeout::new(*delay_ms, move || elapsed.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }

    *elapsed
}

#[hook]
pub fn use_is_mobile() -> bool {
    let (width, _) = use_window_size();
    controls::is_mobile_width(width)
}

#[derive(Clone, PartialEq)]
pub struct LongPress {
    pub onpointerdown: Callback<PointerEvent>,
    pub onpointerup: Callback<PointerEvent>,
    pub onpointerleave: Callback<PointerEvent>,
}

/// Fires `on_hold` once a pointer stays down for `hold_ms`; lifting or
/// leaving earlier cancels it.
#[hook]
pub fn use_long_press(on_hold: Callback<()>, hold_ms: u32) -> LongPress {
    let detector = use_mut_ref(|| HoldDetector::new(BrowserClock, hold_ms));

    {
        let detector = detector.clone();
        use_effect_with_deps(
            move |_| {
                move || detector.borrow_mut().release()
            },
            (),
        );
    }

    let onpointerdown = {
        let detector = detector.clone();
        Callback::from(move |_: PointerEvent| {
            let on_hold = on_hold.clone();
            detector.borrow_mut().press(move || on_hold.emit(()));
        })
    };
    let release = Callback::from(move |_: PointerEvent| {
        detector.borrow_mut().release();
    });

    LongPress {
        onpointerdown,
        onpointerup: release.clone(),
        onpointerleave: release,
    }
}
