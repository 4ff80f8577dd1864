use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::decrypting_text::DecryptingText;
use crate::components::typed_text::TypedText;
use crate::config;
use crate::content::{PROMPT_DESKTOP, PROMPT_MOBILE};

/// Looping muted video behind a dark scrim and a soft light bloom.
#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let video = use_node_ref();

    {
        let video = video.clone();
        use_effect_with_deps(
            move |_| {
                // iOS only autoplays inline video
                if let Some(element) = video.cast::<Element>() {
                    for attribute in ["playsinline", "disablepictureinpicture"] {
                        if element.set_attribute(attribute, "").is_err() {
                            warn!("could not set {} on backdrop video", attribute);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <video
                ref={video}
                class="backdrop__video"
                src="/video.mp4"
                autoplay={true}
                loop={true}
                muted={true}
            />
            <div class="backdrop__scrim"></div>
            <div class="backdrop__glow" aria-hidden="true"></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct PromptProps {
    pub visible: bool,
    pub is_mobile: bool,
}

#[function_component(Prompt)]
pub fn prompt(props: &PromptProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="prompt">
            if props.is_mobile {
                {PROMPT_MOBILE}
            } else {
                <TypedText script={PROMPT_DESKTOP} cursor={false} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub done: bool,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let class = classes!("preloader", props.done.then_some("preloader--done"));

    html! {
        <div class={class} aria-hidden={props.done.to_string()}>
            <DecryptingText text="INITIALIZING" delay_ms={config::PRELOADER_DECRYPT_DELAY_MS} />
            <div class="preloader__bar"><div class="preloader__fill"></div></div>
        </div>
    }
}
