use log::{error, info, warn};
use web_sys::{Element, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::{Backdrop, Preloader, Prompt};
use crate::components::cards::{ServiceCard, TechStackCard};
use crate::components::decrypting_text::GlowTitle;
use crate::components::navbar::Navbar;
use crate::components::reveal_section::RevealSection;
use crate::components::typed_text::TypedText;
use crate::components::work_panel::WorkPanelView;
use crate::config::{self, PageVariant};
use crate::content::{self, PageCopy};
use crate::controls::{self, Anchor, KeyCommand, PanelSignal, WorkPanel};
use crate::effects::scroll::SectionReveal;
use crate::hooks::{use_elapsed, use_is_mobile, use_long_press, LongPress};
use crate::Route;

#[derive(Clone, PartialEq)]
struct SectionRefs {
    services: NodeRef,
    tech: NodeRef,
    contact: NodeRef,
}

impl SectionRefs {
    fn node(&self, anchor: Anchor) -> &NodeRef {
        match anchor {
            Anchor::Services => &self.services,
            Anchor::Tech => &self.tech,
            Anchor::Contact => &self.contact,
        }
    }
}

fn scroll_into_view(node: &NodeRef, anchor: Anchor) {
    match node.cast::<Element>() {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("section #{} is not mounted", anchor.id()),
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub variant: PageVariant,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let variant = props.variant;
    let copy = content::copy(variant);
    let panel = use_state_eq(WorkPanel::default);
    let is_mobile = use_is_mobile();
    let loaded = use_elapsed(config::PRELOADER_MS);
    let sections = use_memo(
        |_| SectionRefs {
            services: NodeRef::default(),
            tech: NodeRef::default(),
            contact: NodeRef::default(),
        },
        (),
    );
    let reveal = use_memo(
        |variant| {
            variant.section_reveal().unwrap_or_else(|err| {
                error!("bad reveal curves for {:?}: {}", variant, err);
                SectionReveal::pinned()
            })
        },
        variant,
    );

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |variant| {
            info!("Mounted {:?} page", variant);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        variant,
    );

    let signal = {
        let panel = panel.clone();
        Callback::from(move |signal: PanelSignal| {
            if !variant.has_work_panel() {
                return;
            }
            let next = (*panel).apply(signal);
            if next != *panel {
                info!("work panel {:?}", next);
            }
            panel.set(next);
        })
    };

    {
        let signal = signal.clone();
        let sections = sections.clone();
        let current = *panel;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            match controls::on_key_down(&e.key(), current, is_mobile) {
                KeyCommand::Signal(next) => signal.emit(next),
                KeyCommand::ScrollTo(anchor) => scroll_into_view(sections.node(anchor), anchor),
                KeyCommand::Ignore => {}
            }
        });
    }
    {
        let signal = signal.clone();
        let current = *panel;
        use_event_with_window("keyup", move |e: KeyboardEvent| {
            if let KeyCommand::Signal(next) = controls::on_key_up(&e.key(), current) {
                signal.emit(next);
            }
        });
    }

    let long_press = {
        let signal = signal.clone();
        use_long_press(
            Callback::from(move |_| {
                if let Some(next) = controls::on_hold(is_mobile) {
                    signal.emit(next);
                }
            }),
            config::LONG_PRESS_MS,
        )
    };
    let release = {
        let signal = signal.clone();
        Callback::from(move |_: PointerEvent| {
            if let Some(next) = controls::on_release(is_mobile) {
                signal.emit(next);
            }
        })
    };
    let show_work = signal.reform(|_: ()| PanelSignal::Open);
    let close_work = signal.reform(|_: ()| PanelSignal::Close);

    html! {
        <div class="site">
            <style>{PAGE_STYLES}</style>
            <Preloader done={loaded} />
            <Navbar variant={variant} on_show_work={show_work} />
            <Backdrop />
            <Prompt visible={panel.shows_prompt() && variant.has_work_panel()} is_mobile={is_mobile} />
            <main class="site__main" onpointerup={release}>
                <HeroSection variant={variant} long_press={long_press} />
                <IntelBlock variant={variant} />
                <RevealSection anchor={Anchor::Services} title={copy.services_title} node={sections.services.clone()} reveal={(*reveal).clone()}>
                    <div class="grid grid--services">
                        { for copy.services.iter().map(|service| html! {
                            <ServiceCard key={service.title} service={service} />
                        }) }
                    </div>
                </RevealSection>
                if variant.has_work_panel() {
                    <WorkPanelView open={panel.is_open()} on_close={close_work} />
                }
                <RevealSection anchor={Anchor::Tech} title={copy.tech_title} node={sections.tech.clone()} reveal={(*reveal).clone()}>
                    <div class="grid grid--tech">
                        { for copy.tech_groups.iter().map(|group| html! {
                            <TechStackCard key={group.title} group={group} />
                        }) }
                    </div>
                </RevealSection>
                <RevealSection anchor={Anchor::Contact} title="Contact" node={sections.contact.clone()} reveal={(*reveal).clone()}>
                    <ContactLinks variant={variant} />
                </RevealSection>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroSectionProps {
    variant: PageVariant,
    long_press: LongPress,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroSectionProps) -> Html {
    let copy = content::copy(props.variant);
    let intro_visible = use_elapsed(config::INTRO_FADE_DELAY_MS);
    let long_press = props.long_press.clone();

    html! {
        <section
            class="hero"
            onpointerdown={long_press.onpointerdown}
            onpointerup={long_press.onpointerup}
            onpointerleave={long_press.onpointerleave}
        >
            if let Some(heading) = copy.heading {
                <h2 class="hero__heading">{heading}</h2>
            }
            if let Some(tagline) = copy.tagline {
                <h1 class="hero__tagline">
                    <TypedText script={tagline} />
                </h1>
            }
            <GlowTitle text={content::STUDIO_NAME} settings={props.variant.decrypt_settings()} />
            if let Some(intro) = copy.intro {
                <p class={classes!("hero__intro", intro_visible.then_some("hero__intro--visible"))}>
                    {intro}
                </p>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct VariantProps {
    variant: PageVariant,
}

#[function_component(IntelBlock)]
fn intel_block(props: &VariantProps) -> Html {
    let copy = content::copy(props.variant);
    if copy.intel.is_empty() {
        return html! {};
    }

    html! {
        <aside class="intel" aria-label="About the studio">
            <h2 class="intel__title">{"// Intel"}</h2>
            <dl class="intel__list">
                { for copy.intel.iter().map(|(key, value)| html! {
                    <div class="intel__row" key={*key}>
                        <dt>{*key}</dt>
                        <dd>{*value}</dd>
                    </div>
                }) }
            </dl>
        </aside>
    }
}

#[function_component(ContactLinks)]
fn contact_links(props: &VariantProps) -> Html {
    let copy: &PageCopy = content::copy(props.variant);
    let whatsapp = content::whatsapp_link(content::WHATSAPP_NUMBER, content::WHATSAPP_MESSAGE);
    let email = content::mailto_link(content::EMAIL_ADDRESS, copy.email_subject);

    html! {
        <div class="contact">
            <p class="contact__blurb">{copy.contact_blurb}</p>
            <div class="contact__links">
                <a class="contact__button contact__button--whatsapp" href={whatsapp} target="_blank" rel="noopener noreferrer">
                    {"✆ "}{copy.whatsapp_label}
                </a>
                <a class="contact__button contact__button--email" href={email}>
                    {"✉ "}{copy.email_label}
                </a>
            </div>
            if props.variant == PageVariant::Showcase {
                <Link<Route> to={Route::Home} classes="contact__back">{"← Back to the studio"}</Link<Route>>
            }
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Share Tech Mono', ui-monospace, monospace;
    }
    .site__main {
        position: relative;
        z-index: 10;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 40;
        animation: navDrop 0.8s ease-out 0.5s both;
    }
    @keyframes navDrop {
        from { transform: translateY(-100px); }
        to { transform: translateY(0); }
    }
    .nav-content {
        max-width: 64rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
        letter-spacing: 0.1em;
        text-decoration: none;
    }
    .nav-cta {
        padding: 0.5rem 1rem;
        background: rgba(220, 38, 38, 0.9);
        color: #fff;
        font: inherit;
        font-weight: 700;
        font-size: 0.875rem;
        border: 1px solid #dc2626;
        border-radius: 0.375rem;
        cursor: pointer;
        text-decoration: none;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .nav-cta:hover {
        transform: scale(1.05);
        text-shadow: 0 0 8px #ef4444;
        box-shadow: 0 0 12px #ef4444;
    }
    .backdrop__video {
        position: fixed;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        z-index: 2;
        pointer-events: none;
    }
    .backdrop__scrim {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.8);
        z-index: 3;
        pointer-events: none;
    }
    .backdrop__glow {
        position: fixed;
        inset: 0;
        z-index: 4;
        pointer-events: none;
        background: radial-gradient(circle at 50% 20%, rgba(255, 255, 255, 0.18), transparent 55%);
        filter: blur(30px);
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: flex-start;
        user-select: none;
    }
    .hero__tagline {
        font-size: clamp(2rem, 5vw, 3rem);
        font-weight: 300;
        color: #cbd5e1;
        margin: 0 0 1rem;
    }
    .typed-text__cursor {
        animation: blink 1s steps(1) infinite;
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    .glow-title {
        position: relative;
    }
    .glow-title h2 {
        margin: 0;
    }
    .glow-title__halo {
        position: absolute;
        inset: 0;
        color: #e2e8f0;
        opacity: 0.8;
        filter: blur(16px);
        animation: pulse 2s ease-in-out infinite;
    }
    .glow-title__crisp {
        position: relative;
    }
    .glow-title__text {
        font-size: clamp(3.5rem, 10vw, 6rem);
        font-weight: 700;
        letter-spacing: 0.1em;
    }
    @keyframes pulse {
        50% { opacity: 0.4; }
    }
    .hero__intro {
        max-width: 36rem;
        margin-top: 2rem;
        font-size: 1.125rem;
        color: #cbd5e1;
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .hero__intro--visible {
        opacity: 1;
        transform: none;
    }
    .intel {
        border-left: 2px solid #dc2626;
        padding-left: 1.5rem;
        margin-bottom: 4rem;
    }
    .intel__row {
        display: flex;
        gap: 1rem;
    }
    .intel__row dt {
        color: #94a3b8;
        min-width: 6rem;
    }
    .intel__row dd {
        margin: 0;
    }
    .reveal-section {
        min-height: 100vh;
        padding: 8rem 0;
        will-change: opacity, transform;
    }
    .reveal-section__title {
        font-size: 2.25rem;
        margin-bottom: 2rem;
        text-shadow: 0 0 10px rgba(255, 255, 255, 0.3);
    }
    .grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: 1fr;
    }
    @media (min-width: 768px) {
        .grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    }
    @media (min-width: 1024px) {
        .grid--services { grid-template-columns: repeat(3, minmax(0, 1fr)); }
        .grid--tech { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    }
    .work-panel {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(12px);
        animation: fadeIn 0.3s ease;
    }
    .work-panel__dialog {
        position: relative;
        width: 100%;
        max-width: 56rem;
        background: rgba(0, 0, 0, 0.8);
        border: 1px solid #334155;
        border-radius: 0.5rem;
        padding: 2rem;
        animation: zoomIn 0.3s ease;
    }
    .work-panel__close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #94a3b8;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .work-panel__close:hover {
        color: #fff;
    }
    .work-panel__grid {
        display: grid;
        gap: 2rem;
    }
    @media (min-width: 768px) {
        .work-panel__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes zoomIn {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    .prompt {
        position: fixed;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 30;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid #334155;
        color: #cbd5e1;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        backdrop-filter: blur(4px);
        user-select: none;
        animation: fadeIn 0.4s ease;
    }
    .contact__blurb {
        max-width: 36rem;
        font-size: 1.125rem;
        color: #cbd5e1;
        margin-bottom: 2rem;
    }
    .contact__links {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
    }
    .contact__button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        font-weight: 700;
        border-radius: 0.375rem;
        text-decoration: none;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .contact__button:hover {
        transform: scale(1.05);
    }
    .contact__button--whatsapp {
        background: rgba(255, 255, 255, 0.9);
        color: #000;
        border: 1px solid #fff;
    }
    .contact__button--whatsapp:hover {
        box-shadow: 0 0 12px #fff;
    }
    .contact__button--email {
        background: rgba(220, 38, 38, 0.9);
        color: #fff;
        border: 1px solid #dc2626;
    }
    .contact__button--email:hover {
        box-shadow: 0 0 12px #ef4444;
    }
    .contact__back {
        display: inline-block;
        margin-top: 2rem;
        color: #94a3b8;
    }
    .preloader {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        background: #000;
        font-size: 1.5rem;
        letter-spacing: 0.3em;
        transition: opacity 0.6s ease, visibility 0.6s;
    }
    .preloader--done {
        opacity: 0;
        visibility: hidden;
    }
    .preloader__bar {
        width: 12rem;
        height: 2px;
        background: #1e293b;
        overflow: hidden;
    }
    .preloader__fill {
        height: 100%;
        background: #fff;
        animation: load 1.8s ease-out forwards;
    }
    @keyframes load {
        from { width: 0; }
        to { width: 100%; }
    }
"#;
