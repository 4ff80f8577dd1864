use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::decrypting_text::DecryptingText;
use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{NOT_FOUND_STYLES}</style>
            <h1 class="not-found__code">
                <DecryptingText text="404 // SIGNAL LOST" delay_ms={config::NAV_DECRYPT_DELAY_MS} />
            </h1>
            <p class="not-found__blurb">{"Nothing is transmitting on this channel."}</p>
            <Link<Route> to={Route::Home} classes="not-found__home">{"Return to base"}</Link<Route>>
        </div>
    }
}

const NOT_FOUND_STYLES: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Share Tech Mono', ui-monospace, monospace;
    }
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        text-align: center;
        padding: 1.5rem;
    }
    .not-found__code {
        font-size: clamp(2rem, 6vw, 3.5rem);
        letter-spacing: 0.1em;
        margin: 0;
    }
    .not-found__blurb {
        color: #94a3b8;
    }
    .not-found__home {
        padding: 0.75rem 1.5rem;
        border: 1px solid #dc2626;
        border-radius: 0.375rem;
        color: #fff;
        background: rgba(220, 38, 38, 0.9);
        text-decoration: none;
    }
"#;
