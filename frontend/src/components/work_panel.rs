use yew::prelude::*;

use crate::components::cards::ProjectCard;
use crate::content::PROJECTS;

#[derive(Properties, PartialEq)]
pub struct WorkPanelViewProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// "Case files" modal. Clicking the backdrop closes it, clicks inside the
/// dialog stay inside.
#[function_component(WorkPanelView)]
pub fn work_panel_view(props: &WorkPanelViewProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="work-panel" onclick={close.clone()}>
            <div class="work-panel__dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="work-panel__close" aria-label="Close work panel" onclick={close}>
                    {"✕"}
                </button>
                <h2 class="work-panel__title">{"// Selected_Projects"}</h2>
                <div class="work-panel__grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.title} project={project} />
                    }) }
                </div>
            </div>
        </div>
    }
}
