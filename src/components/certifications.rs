use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{anchors, CERTIFICATIONS};
use crate::theme::ThemedProps;

#[function_component(Certifications)]
pub fn certifications(props: &ThemedProps) -> Html {
    let tokens = props.tokens;

    html! {
        <section id={anchors::CERTIFICATIONS} class="section">
            <h2 class={classes!("section-title", tokens.primary_text)}>{"Verified_Credentials"}</h2>
            <ul class="cert-list">
                { for CERTIFICATIONS.iter().map(|cert| html! {
                    <li key={cert.name} class={classes!("cert-item", "glass-effect", tokens.card_background)}>
                        <IconGlyph icon={cert.icon} class={classes!("cert-item__icon", cert.tone.class())} />
                        <div class="cert-item__body">
                            <h3 class={classes!("cert-item__name", tokens.primary_text)}>{cert.name}</h3>
                            <p class={classes!("cert-item__meta", tokens.secondary_text)}>
                                {cert.org}{" · "}{cert.date}
                            </p>
                        </div>
                    </li>
                }) }
            </ul>

            <style>
                {r#"
                .cert-list {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                .cert-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--gray-800);
                }
                .cert-item__icon {
                    font-size: 1.5rem;
                    min-width: 2rem;
                    text-align: center;
                }
                .cert-item__name {
                    font-size: 0.95rem;
                    font-weight: 700;
                    margin: 0 0 0.25rem;
                }
                .cert-item__meta {
                    font-size: 0.75rem;
                    font-family: var(--font-mono);
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .cert-list { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .cert-list { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
