use yew::prelude::*;

use crate::controls::Anchor;
use crate::effects::scroll::SectionReveal;
use crate::hooks::use_scroll_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub anchor: Anchor,
    pub title: AttrValue,
    /// Bound to the `<section>` so shortcuts can scroll to it.
    pub node: NodeRef,
    pub reveal: SectionReveal,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let style = use_scroll_reveal(props.node.clone(), props.reveal.clone());

    html! {
        <section id={props.anchor.id()} ref={props.node.clone()} class="reveal-section" style={style}>
            <h2 class="reveal-section__title">{"// "}{props.title.clone()}</h2>
            { for props.children.iter() }
        </section>
    }
}
