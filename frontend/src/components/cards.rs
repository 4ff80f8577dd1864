use stylist::yew::styled_component;
use yew::prelude::*;

use crate::content::{Project, Service, TechGroup};

#[derive(Properties)]
pub struct ServiceCardProps {
    pub service: &'static Service,
}

impl PartialEq for ServiceCardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.service, other.service)
    }
}

#[styled_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let card = css!(
        r#"
        background: rgba(0, 0, 0, 0.5);
        padding: 1.5rem;
        border-radius: 0.5rem;
        border: 1px solid #334155;
        backdrop-filter: blur(4px);
        transition: transform 0.2s ease, box-shadow 0.2s ease;

        &:hover {
            transform: scale(1.03);
            box-shadow: 0 0 20px rgba(255, 255, 255, 0.2);
        }

        .service-card__head {
            display: flex;
            align-items: center;
            gap: 1rem;
            margin-bottom: 1rem;
            color: #fff;
        }

        h3 {
            font-size: 1.5rem;
            font-weight: 600;
            margin: 0;
        }

        p {
            color: #94a3b8;
            margin: 0;
        }
    "#
    );

    html! {
        <div class={card}>
            <div class="service-card__head">
                <span class="service-card__glyph">{props.service.glyph}</span>
                <h3>{props.service.title}</h3>
            </div>
            <p>{props.service.blurb}</p>
        </div>
    }
}

#[derive(Properties)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

impl PartialEq for ProjectCardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.project, other.project)
    }
}

#[styled_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let card = css!(
        r#"
        position: relative;
        overflow: hidden;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid #334155;
        border-radius: 0.5rem;
        padding: 1.5rem;
        transition: transform 0.3s ease, box-shadow 0.3s ease;

        &:hover {
            transform: scale(1.05);
            box-shadow: 0 0 25px rgba(255, 255, 255, 0.3);
        }

        .project-card__badge {
            position: absolute;
            top: 0.5rem;
            right: 0.5rem;
            background: #facc15;
            color: #000;
            font-size: 0.75rem;
            font-weight: 700;
            padding: 0.25rem 0.5rem;
            border-radius: 0.25rem;
        }

        h3 {
            font-size: 1.5rem;
            font-weight: 600;
            margin: 0 0 0.5rem;
            color: #fff;
        }

        p {
            color: #94a3b8;
            margin: 0;
        }
    "#
    );

    let project = props.project;
    html! {
        <article class={card}>
            if project.coming_soon {
                <div class="project-card__badge">{"COMING SOON"}</div>
            }
            <h3>{project.title}</h3>
            <p>{project.description}</p>
        </article>
    }
}

#[derive(Properties)]
pub struct TechStackCardProps {
    pub group: &'static TechGroup,
}

impl PartialEq for TechStackCardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.group, other.group)
    }
}

#[styled_component(TechStackCard)]
pub fn tech_stack_card(props: &TechStackCardProps) -> Html {
    let card = css!(
        r#"
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid #334155;
        border-radius: 0.5rem;
        padding: 1.5rem;

        h3 {
            font-size: 1.25rem;
            font-weight: 700;
            color: #fff;
            margin: 0 0 1rem;
        }

        ul {
            display: grid;
            grid-template-columns: repeat(2, minmax(0, 1fr));
            gap: 1rem;
            list-style: none;
            padding: 0;
            margin: 0;
        }

        li {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            color: #cbd5e1;
            transition: color 0.2s ease;
        }

        li:hover {
            color: #fff;
        }
    "#
    );

    html! {
        <div class={card}>
            <h3>{props.group.title}</h3>
            <ul>
                { for props.group.techs.iter().map(|tech| html! {
                    <li key={tech.name}>
                        if let Some(glyph) = tech.glyph {
                            <span class="tech__glyph">{glyph}</span>
                        }
                        <span>{tech.name}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
