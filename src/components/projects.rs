use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{anchors, PROJECTS};
use crate::theme::ThemedProps;

#[function_component(Projects)]
pub fn projects(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <section id={anchors::PROJECTS} class="section">
            <h2 class={classes!("projects__title", tokens.primary_text)}>{"Selected_Works"}</h2>
            <div class="projects__grid">
                { for PROJECTS.iter().map(|project| {
                    // The featured card keeps its dark surface in both themes.
                    let (card, title, summary) = if project.featured {
                        ("project-card--featured", "text-white", "text-gray-400")
                    } else {
                        (tokens.card_background, tokens.primary_text, tokens.secondary_text)
                    };
                    html! {
                        <div key={project.title} class={classes!("project-card", card)}>
                            <IconGlyph icon={project.icon} class={classes!("project-card__icon", project.tone.class())} />
                            <h3 class={classes!("project-card__title", title)}>{project.title}</h3>
                            <p class={classes!("project-card__summary", summary)}>{project.summary}</p>
                            {
                                if project.actions.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <div class="project-card__actions">
                                            { for project.actions.iter().enumerate().map(|(i, label)| html! {
                                                <button
                                                    key={*label}
                                                    class={classes!("project-card__action", (i == 0).then(|| "project-card__action--primary"))}
                                                >
                                                    {*label}
                                                </button>
                                            }) }
                                        </div>
                                    }
                                }
                            }
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
                .projects__title {
                    font-size: 1.875rem;
                    font-weight: 900;
                    font-style: italic;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                    margin: 0 0 3rem;
                }
                .projects__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .project-card {
                    padding: 2rem;
                    border-radius: var(--radius-lg);
                    border: 2px solid var(--gray-800);
                    transition: transform var(--transition);
                }
                .project-card:hover { transform: translateY(-5px); }
                .project-card--featured {
                    background: rgba(17, 24, 39, 0.5);
                    border-color: rgba(16, 185, 129, 0.3);
                }
                .text-white { color: #ffffff; }
                .project-card__icon {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                }
                .project-card__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .project-card__summary {
                    font-size: 0.75rem;
                    line-height: 1.6;
                    margin: 0 0 2rem;
                }
                .project-card__actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .project-card__action {
                    padding: 0.5rem 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(16, 185, 129, 0.3);
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.75rem;
                }
                .project-card__action--primary {
                    background: var(--emerald);
                    border-color: var(--emerald);
                }
                @media (min-width: 640px) {
                    .projects__title { font-size: 2.25rem; }
                    .project-card { padding: 2.5rem; border-radius: 3rem; }
                    .project-card__title { font-size: 1.875rem; }
                    .project-card__summary { font-size: 0.875rem; }
                    .project-card__actions { flex-direction: row; }
                }
                @media (min-width: 768px) {
                    .projects__grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                }
                "#}
            </style>
        </section>
    }
}
