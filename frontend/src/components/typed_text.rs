use yew::prelude::*;

use crate::config;
use crate::effects::typing::TypeScript;
use crate::hooks::use_typed_text;

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub script: TypeScript,
    #[prop_or(config::KEYSTROKE_MS)]
    pub keystroke_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(true)]
    pub cursor: bool,
}

#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let shown = use_typed_text(props.script, props.keystroke_ms, props.delay_ms);

    html! {
        <span class="typed-text">
            {shown}
            if props.cursor {
                <span class="typed-text__cursor" aria-hidden="true">{"|"}</span>
            }
        </span>
    }
}
