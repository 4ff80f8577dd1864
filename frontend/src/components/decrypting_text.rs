use yew::prelude::*;

use crate::config;
use crate::effects::decrypt::DecryptSettings;
use crate::hooks::use_decrypting_text;

#[derive(Properties, PartialEq)]
pub struct DecryptingTextProps {
    pub text: AttrValue,
    #[prop_or(config::DECRYPT_DELAY_MS)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub settings: DecryptSettings,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(DecryptingText)]
pub fn decrypting_text(props: &DecryptingTextProps) -> Html {
    let shown = use_decrypting_text(props.text.clone(), props.delay_ms, props.settings.clone());

    html! {
        <span class={props.class.clone()} aria-label={props.text.clone()}>{shown}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub settings: DecryptSettings,
}

/// Crisp decrypting title over a blurred, pulsing duplicate. Each layer runs
/// its own decryption.
#[function_component(GlowTitle)]
pub fn glow_title(props: &GlowTitleProps) -> Html {
    html! {
        <div class="glow-title">
            <h2 class="glow-title__halo" aria-hidden="true">
                <DecryptingText text={props.text.clone()} settings={props.settings.clone()} class="glow-title__text" />
            </h2>
            <h2 class="glow-title__crisp">
                <DecryptingText text={props.text.clone()} settings={props.settings.clone()} class="glow-title__text" />
            </h2>
        </div>
    }
}
