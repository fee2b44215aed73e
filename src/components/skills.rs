use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{anchors, Icon, CAPABILITIES, COMPETENCIES};
use crate::theme::ThemedProps;

#[function_component(Skills)]
pub fn skills(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <>
            <section id={anchors::SKILLS} class="section">
                <h2 class={classes!("section-title", "section-title--underlined", tokens.primary_text)}>
                    {"Capability_Grid"}
                </h2>
                <div class="capability-grid">
                    { for CAPABILITIES.iter().map(|card| html! {
                        <div key={card.title} class={classes!("capability-card", "glass-effect", tokens.card_background)}>
                            <IconGlyph icon={card.icon} class={classes!("capability-card__icon", "accent")} />
                            <h3 class={classes!("capability-card__title", tokens.primary_text)}>{card.title}</h3>
                            <p class={classes!("capability-card__summary", tokens.secondary_text)}>{card.summary}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="competency-grid">
                { for COMPETENCIES.iter().map(|comp| html! {
                    <div key={comp.subject} class={classes!("competency-card", "glass-effect", tokens.card_background)}>
                        <IconGlyph icon={Icon::CheckCircle} class={classes!("accent")} />
                        <h4 class={classes!("competency-card__subject", tokens.secondary_text)}>{comp.subject}</h4>
                        <p class="competency-card__level accent">{comp.level}</p>
                        <p class={classes!("competency-card__grade", tokens.secondary_text)}>{comp.grade}</p>
                    </div>
                }) }
            </section>

            <style>
                {r#"
                .capability-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .capability-card {
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                }
                .capability-card__icon {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }
                .capability-card__title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .capability-card__summary {
                    font-size: 0.75rem;
                    line-height: 1.6;
                    margin: 0;
                }
                .competency-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    padding: 2.5rem 0;
                }
                .competency-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--gray-800);
                    text-align: center;
                }
                .competency-card__subject {
                    font-size: 10px;
                    text-transform: uppercase;
                    font-weight: 700;
                    line-height: 1.25;
                    margin: 0.75rem 0 0.25rem;
                }
                .competency-card__level {
                    font-size: 0.75rem;
                    font-weight: 700;
                    margin: 0;
                }
                .competency-card__grade {
                    font-size: 9px;
                    font-style: italic;
                    margin: 0.5rem 0 0;
                }
                @media (min-width: 640px) {
                    .capability-card { padding: 2rem; border-radius: 2.5rem; }
                    .competency-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 768px) {
                    .capability-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (min-width: 1024px) {
                    .competency-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </>
    }
}
