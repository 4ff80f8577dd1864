use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::decrypting_text::DecryptingText;
use crate::config::{self, PageVariant};
use crate::content::STUDIO_NAME;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub variant: PageVariant,
    pub on_show_work: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let show_work = {
        let on_show_work = props.on_show_work.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_show_work.emit(());
        })
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <DecryptingText
                        text={STUDIO_NAME}
                        delay_ms={config::NAV_DECRYPT_DELAY_MS}
                        settings={props.variant.decrypt_settings()}
                    />
                </Link<Route>>
                {
                    match props.variant {
                        PageVariant::Studio => html! {
                            <button class="nav-cta" onclick={show_work}>{"View Work"}</button>
                        },
                        PageVariant::Showcase => html! {
                            <Link<Route> to={Route::Home} classes="nav-cta">{"Back"}</Link<Route>>
                        },
                    }
                }
            </div>
        </header>
    }
}
