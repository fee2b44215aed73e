use yew::prelude::*;

use crate::content::{anchors, EXPERIENCE};
use crate::theme::ThemedProps;

#[function_component(Experience)]
pub fn experience(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <section id={anchors::EXPERIENCE} class="section">
            <div class="timeline">
                <h2 class={classes!("section-title", "section-title--underlined", tokens.primary_text)}>
                    {"Professional_Journey"}
                </h2>
                <div class="timeline__entries">
                    { for EXPERIENCE.iter().map(|entry| html! {
                        <div key={entry.role} class={classes!("timeline__entry", "glass-effect", tokens.card_background)}>
                            <span class={classes!("timeline__period", entry.tone.class())}>{entry.period}</span>
                            <h3 class={classes!("timeline__role", tokens.primary_text)}>{entry.role}</h3>
                            <p class={classes!("timeline__org", tokens.secondary_text)}>{entry.organization}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .timeline {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .timeline__entries {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .timeline__entry {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--gray-800);
                }
                .timeline__period {
                    display: block;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                }
                .timeline__role {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    margin: 0;
                }
                .timeline__org {
                    font-size: 0.75rem;
                    font-weight: 500;
                    font-style: italic;
                    margin: 0.25rem 0 0.5rem;
                }
                @media (min-width: 640px) {
                    .timeline__entries { gap: 3rem; }
                    .timeline__entry { padding: 2rem; border-radius: 1.5rem; }
                    .timeline__role { font-size: 1.5rem; }
                    .timeline__org { font-size: 0.875rem; }
                }
                "#}
            </style>
        </section>
    }
}
